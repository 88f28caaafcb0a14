use std::sync::Mutex;

use crop_ledger::{core::Tracker, storage::FlatFile};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a tracker backed by a unique temporary data file.
pub fn setup_tracker() -> (Tracker, std::path::PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("crop.txt");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let tracker = Tracker::open(FlatFile::new(&path)).expect("open tracker");
    (tracker, path)
}
