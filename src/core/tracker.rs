//! Tracker: owns the in-memory store and its flat-file projection.

use crate::domain::{Season, SeasonEntry};
use crate::storage::{FlatFile, Result};
use crate::store::RecordStore;

/// Coordinates every mutation so the file stays a projection of the store.
///
/// Adds append to both store and file; deletes and bulk updates mutate the
/// store first and then resync with a full rewrite. A failed write surfaces
/// as an error to the caller but does not roll back the in-memory change.
/// The tracker is the single owner of both resources; callers are expected
/// to be single-threaded.
pub struct Tracker {
    store: RecordStore,
    file: FlatFile,
}

impl Tracker {
    pub fn new(file: FlatFile) -> Self {
        Self {
            store: RecordStore::new(),
            file,
        }
    }

    /// Creates a tracker and loads whatever the data file holds.
    pub fn open(file: FlatFile) -> Result<Self> {
        let mut tracker = Self::new(file);
        tracker.load()?;
        Ok(tracker)
    }

    /// Clears the store and replaces it from the data file; returns the
    /// number of entries loaded. A missing file loads as zero entries.
    pub fn load(&mut self) -> Result<usize> {
        let entries = self.file.load()?;
        let count = entries.len();
        self.store.replace_all(entries);
        Ok(count)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Appends a new entry for the current year with zero income and mirrors
    /// it to the file. Returns a copy of the stored entry for display.
    pub fn add_entry(
        &mut self,
        season: Season,
        crop: impl Into<String>,
        expenses: f64,
    ) -> Result<SeasonEntry> {
        let entry = SeasonEntry::new(season, crop, expenses);
        self.store.append(entry.clone());
        self.file.append_entry(&entry)?;
        tracing::debug!(season = %entry.season, crop = %entry.crop, "entry added");
        Ok(entry)
    }

    /// Adds `amount` to the expenses of every entry matching `season_name`;
    /// returns the count updated. The amount is taken as given: a negative
    /// addition may drive a field negative.
    pub fn add_expense(&mut self, season_name: &str, amount: f64) -> Result<usize> {
        self.mutate_season(season_name, |entry| entry.expenses += amount)
    }

    /// Adds `amount` to the income of every entry matching `season_name`;
    /// returns the count updated.
    pub fn add_income(&mut self, season_name: &str, amount: f64) -> Result<usize> {
        self.mutate_season(season_name, |entry| entry.income += amount)
    }

    /// Removes every entry whose season name equals `name`; returns the
    /// count removed. Zero matches leaves store and file untouched.
    pub fn delete_by_season(&mut self, name: &str) -> Result<usize> {
        let removed = self.store.remove_all(|entry| entry.season.as_str() == name);
        if removed > 0 {
            self.file.rewrite(self.store.iter())?;
            tracing::debug!(season = name, removed, "entries deleted");
        }
        Ok(removed)
    }

    /// Removes every entry whose crop name equals `name`; returns the count
    /// removed.
    pub fn delete_by_crop(&mut self, name: &str) -> Result<usize> {
        let removed = self.store.remove_all(|entry| entry.crop == name);
        if removed > 0 {
            self.file.rewrite(self.store.iter())?;
            tracing::debug!(crop = name, removed, "entries deleted");
        }
        Ok(removed)
    }

    /// Releases all in-memory entries; the file is left as-is.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    fn mutate_season<M>(&mut self, season_name: &str, mutation: M) -> Result<usize>
    where
        M: FnMut(&mut SeasonEntry),
    {
        let touched = self
            .store
            .mutate_all(|entry| entry.season.as_str() == season_name, mutation);
        if touched > 0 {
            self.file.rewrite(self.store.iter())?;
        }
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tracker_in(dir: &std::path::Path) -> Tracker {
        Tracker::new(FlatFile::new(dir.join("crop.txt")))
    }

    #[test]
    fn added_entry_is_listed_with_its_input_fields() {
        let dir = tempdir().unwrap();
        let mut tracker = tracker_in(dir.path());

        let added = tracker.add_entry(Season::Spring, "Corn", 120.0).unwrap();
        assert_eq!(added.expenses, 120.0);
        assert_eq!(added.income, 0.0);

        let stored: Vec<_> = tracker.store().iter().collect();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], &added);
        assert_eq!(stored[0].profit(), -120.0);
    }

    #[test]
    fn delete_by_season_then_search_finds_nothing() {
        let dir = tempdir().unwrap();
        let mut tracker = tracker_in(dir.path());
        tracker.add_entry(Season::Spring, "Corn", 10.0).unwrap();
        tracker.add_entry(Season::Spring, "Peas", 20.0).unwrap();
        tracker.add_entry(Season::Winter, "Kale", 30.0).unwrap();

        assert_eq!(tracker.delete_by_season("Spring").unwrap(), 2);
        assert!(tracker
            .store()
            .find_all(|e| e.season == Season::Spring)
            .next()
            .is_none());
        assert_eq!(tracker.store().len(), 1);
    }

    #[test]
    fn delete_with_no_matches_reports_zero() {
        let dir = tempdir().unwrap();
        let mut tracker = tracker_in(dir.path());
        tracker.add_entry(Season::Spring, "Corn", 10.0).unwrap();

        assert_eq!(tracker.delete_by_crop("Rice").unwrap(), 0);
        assert_eq!(tracker.store().len(), 1);
    }

    #[test]
    fn add_expense_bumps_every_match_by_the_amount() {
        let dir = tempdir().unwrap();
        let mut tracker = tracker_in(dir.path());
        tracker.add_entry(Season::Summer, "Wheat", 100.0).unwrap();
        tracker.add_entry(Season::Summer, "Barley", 25.0).unwrap();
        tracker.add_entry(Season::Winter, "Kale", 50.0).unwrap();

        assert_eq!(tracker.add_expense("Summer", 30.0).unwrap(), 2);

        let summer: Vec<_> = tracker
            .store()
            .find_all(|e| e.season == Season::Summer)
            .collect();
        assert_eq!(summer[0].expenses, 130.0);
        assert_eq!(summer[1].expenses, 55.0);
        assert!(summer.iter().all(|e| e.income == 0.0));

        let winter: Vec<_> = tracker
            .store()
            .find_all(|e| e.season == Season::Winter)
            .collect();
        assert_eq!(winter[0].expenses, 50.0);
    }

    #[test]
    fn negative_additions_are_permitted_and_can_go_below_zero() {
        // Additive updates are not re-validated; this documents the
        // permissive behavior rather than endorsing it.
        let dir = tempdir().unwrap();
        let mut tracker = tracker_in(dir.path());
        tracker.add_entry(Season::Autumn, "Squash", 10.0).unwrap();

        tracker.add_expense("Autumn", -25.0).unwrap();
        let entry: Vec<_> = tracker.store().iter().collect();
        assert_eq!(entry[0].expenses, -15.0);
    }

    #[test]
    fn mutations_resync_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crop.txt");
        let mut tracker = Tracker::new(FlatFile::new(&path));
        tracker.add_entry(Season::Spring, "Corn", 10.0).unwrap();
        tracker.add_entry(Season::Summer, "Wheat", 20.0).unwrap();
        tracker.add_income("Summer", 75.0).unwrap();
        tracker.delete_by_season("Spring").unwrap();

        let mut reloaded = Tracker::open(FlatFile::new(&path)).unwrap();
        assert_eq!(reloaded.load().unwrap(), 1);
        let entries: Vec<_> = reloaded.store().iter().collect();
        assert_eq!(entries[0].crop, "Wheat");
        assert_eq!(entries[0].income, 75.0);
    }
}
