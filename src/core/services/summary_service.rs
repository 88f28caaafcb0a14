//! Read-only aggregation over the record store.

use std::collections::BTreeMap;

use crate::domain::{Outcome, SeasonEntry};
use crate::store::RecordStore;

/// Aggregate totals for one season name.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTotals {
    pub season: String,
    pub entry_count: usize,
    pub expenses: f64,
    pub income: f64,
}

impl SeasonTotals {
    pub fn profit(&self) -> f64 {
        self.income - self.expenses
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_profit(self.profit())
    }
}

/// Aggregate totals for one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTotals {
    pub year: i32,
    pub entry_count: usize,
    pub expenses: f64,
    pub income: f64,
}

impl YearTotals {
    pub fn profit(&self) -> f64 {
        self.income - self.expenses
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_profit(self.profit())
    }
}

/// Stateless query helpers; every call is a fresh full scan of the store.
pub struct SummaryService;

impl SummaryService {
    /// All entries ordered by season name (lexical), ties keeping insertion
    /// order.
    pub fn sorted_by_season(store: &RecordStore) -> Vec<&SeasonEntry> {
        let mut entries: Vec<&SeasonEntry> = store.iter().collect();
        entries.sort_by_key(|entry| entry.season.as_str());
        entries
    }

    /// Entries whose season name equals `name` exactly. An unknown or
    /// mismatched-case name simply yields no results.
    pub fn search_by_season<'a>(store: &'a RecordStore, name: &str) -> Vec<&'a SeasonEntry> {
        store
            .find_all(move |entry| entry.season.as_str() == name)
            .collect()
    }

    /// Sums expenses and income across all entries matching `name`; profit
    /// and outcome are computed over the sums, not per entry.
    pub fn seasonal_totals(store: &RecordStore, name: &str) -> SeasonTotals {
        let mut totals = SeasonTotals {
            season: name.to_string(),
            entry_count: 0,
            expenses: 0.0,
            income: 0.0,
        };
        for entry in store.find_all(|entry| entry.season.as_str() == name) {
            totals.entry_count += 1;
            totals.expenses += entry.expenses;
            totals.income += entry.income;
        }
        totals
    }

    /// Groups all entries by year and sums per bucket, ascending year order.
    pub fn annual_totals(store: &RecordStore) -> Vec<YearTotals> {
        let mut by_year: BTreeMap<i32, YearTotals> = BTreeMap::new();
        for entry in store.iter() {
            let totals = by_year.entry(entry.year).or_insert_with(|| YearTotals {
                year: entry.year,
                entry_count: 0,
                expenses: 0.0,
                income: 0.0,
            });
            totals.entry_count += 1;
            totals.expenses += entry.expenses;
            totals.income += entry.income;
        }
        by_year.into_values().collect()
    }
}
