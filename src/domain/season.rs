use std::fmt;
use std::str::FromStr;

use crate::errors::TrackerError;

/// One of the four fixed calendar-season labels used as a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Menu presentation order, matching the original 1-4 season picker.
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = TrackerError;

    /// Season names are a controlled vocabulary; matching is exact and
    /// case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spring" => Ok(Season::Spring),
            "Summer" => Ok(Season::Summer),
            "Autumn" => Ok(Season::Autumn),
            "Winter" => Ok(Season::Winter),
            other => Err(TrackerError::UnknownSeason(other.to_string())),
        }
    }
}
