//! In-memory record store: an owned, ordered collection of season entries.

use crate::domain::SeasonEntry;

/// Ordered collection of all entries for the process lifetime.
///
/// Backed by a `Vec` so appends are O(1) amortized and iteration follows
/// insertion order. Operations take predicates so callers decide the match
/// key (season, crop, year) without the store knowing about any of them.
#[derive(Debug, Default)]
pub struct RecordStore {
    entries: Vec<SeasonEntry>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry at the end of the collection.
    pub fn append(&mut self, entry: SeasonEntry) {
        self.entries.push(entry);
    }

    /// Replaces the whole collection, used when reloading from disk.
    pub fn replace_all(&mut self, entries: Vec<SeasonEntry>) {
        self.entries = entries;
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeasonEntry> {
        self.entries.iter()
    }

    /// Lazy sequence of entries matching `predicate`, in insertion order.
    pub fn find_all<P>(&self, predicate: P) -> impl Iterator<Item = &SeasonEntry>
    where
        P: Fn(&SeasonEntry) -> bool,
    {
        self.entries.iter().filter(move |&entry| predicate(entry))
    }

    /// Removes every entry satisfying `predicate`; returns the count removed.
    /// Zero matches is a normal outcome, not an error.
    pub fn remove_all<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(&SeasonEntry) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| !predicate(entry));
        before - self.entries.len()
    }

    /// Applies `mutation` to every entry satisfying `predicate`; returns the
    /// count touched. Non-matching entries are untouched.
    pub fn mutate_all<P, M>(&mut self, predicate: P, mut mutation: M) -> usize
    where
        P: Fn(&SeasonEntry) -> bool,
        M: FnMut(&mut SeasonEntry),
    {
        let mut touched = 0;
        for entry in self.entries.iter_mut() {
            if predicate(entry) {
                mutation(entry);
                touched += 1;
            }
        }
        touched
    }

    /// Releases all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
