//! Persistence for the record store: a flat, comma-delimited text file.

pub mod flat_file;

use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

pub use flat_file::{FlatFile, DEFAULT_FILE_NAME};
