use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::domain::SeasonEntry;

use super::Result;

pub const DEFAULT_FILE_NAME: &str = "crop.txt";

const FIELDS_PER_LINE: usize = 5;

/// On-disk projection of the record store.
///
/// One entry per line, fields joined by literal commas in fixed order
/// `season,crop,year,expenses,income`, no header and no escaping. Crop names
/// are restricted to letters and spaces, so a comma can only mean a field
/// boundary. Every operation opens, writes, and closes the file; no handle
/// is held in between.
#[derive(Debug, Clone)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every well-formed line into a fresh vector.
    ///
    /// A missing file is not an error: the tracker simply starts empty.
    /// Malformed lines (wrong field count, unparseable season or numerics)
    /// are skipped with a diagnostic rather than aborting the load.
    pub fn load(&self) -> Result<Vec<SeasonEntry>> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "data file absent, starting empty");
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            match parse_line(&line) {
                Some(entry) => entries.push(entry),
                None => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        "skipping malformed line"
                    );
                }
            }
        }
        tracing::debug!(count = entries.len(), "loaded entries from data file");
        Ok(entries)
    }

    /// Appends a single serialized entry; used after a successful add.
    pub fn append_entry(&self, entry: &SeasonEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serialize_line(entry))?;
        Ok(())
    }

    /// Truncates and rewrites the file with every entry, in store order.
    ///
    /// The format has no random-access update or delete, so deletes and bulk
    /// mutations resync the file with a full rewrite.
    pub fn rewrite<'a>(&self, entries: impl IntoIterator<Item = &'a SeasonEntry>) -> Result<()> {
        let mut file = File::create(&self.path)?;
        for entry in entries {
            writeln!(file, "{}", serialize_line(entry))?;
        }
        Ok(())
    }
}

fn serialize_line(entry: &SeasonEntry) -> String {
    format!(
        "{},{},{},{},{}",
        entry.season, entry.crop, entry.year, entry.expenses, entry.income
    )
}

fn parse_line(line: &str) -> Option<SeasonEntry> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_LINE {
        return None;
    }
    Some(SeasonEntry {
        season: fields[0].parse().ok()?,
        crop: fields[1].to_string(),
        year: fields[2].parse().ok()?,
        expenses: fields[3].parse().ok()?,
        income: fields[4].parse().ok()?,
    })
}
