//! Plain-text report rendering for the shell.

use crate::core::services::{SeasonTotals, YearTotals};
use crate::domain::SeasonEntry;

/// Fixed-width table of entries with the derived profit and status columns.
pub fn entry_table(entries: &[&SeasonEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<16} {:<6} {:>12} {:>12} {:>12}  {}\n",
        "Season", "Crop", "Year", "Expenses", "Income", "Profit", "Status"
    ));
    for entry in entries {
        out.push_str(&format!(
            "{:<8} {:<16} {:<6} {:>12.2} {:>12.2} {:>12.2}  {}\n",
            entry.season.as_str(),
            entry.crop,
            entry.year,
            entry.expenses,
            entry.income,
            entry.profit(),
            entry.outcome()
        ));
    }
    out
}

pub fn season_totals_report(totals: &SeasonTotals) -> String {
    format!(
        "{} ({} entries): expenses {:.2}, income {:.2}, profit {:.2} ({})",
        totals.season,
        totals.entry_count,
        totals.expenses,
        totals.income,
        totals.profit(),
        totals.outcome()
    )
}

/// One line per year, ascending, with the per-year outcome.
pub fn annual_report(rows: &[YearTotals]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{}: expenses {:.2}, income {:.2}, profit {:.2} ({})\n",
            row.year,
            row.expenses,
            row.income,
            row.profit(),
            row.outcome()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Season;

    #[test]
    fn entry_table_shows_derived_columns() {
        let entry = SeasonEntry {
            season: Season::Spring,
            crop: "Corn".to_string(),
            year: 2023,
            expenses: 100.0,
            income: 150.0,
        };
        let table = entry_table(&[&entry]);
        assert!(table.contains("Spring"));
        assert!(table.contains("50.00"));
        assert!(table.contains("Profit"));
    }

    #[test]
    fn annual_report_renders_one_line_per_year() {
        let rows = vec![
            YearTotals {
                year: 2023,
                entry_count: 2,
                expenses: 150.0,
                income: 180.0,
            },
            YearTotals {
                year: 2024,
                entry_count: 1,
                expenses: 10.0,
                income: 0.0,
            },
        ];
        let report = annual_report(&rows);
        assert!(report.contains("2023: expenses 150.00, income 180.00, profit 30.00 (Profit)"));
        assert!(report.contains("2024:"));
        assert!(report.contains("(Loss)"));
    }
}
