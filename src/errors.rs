use thiserror::Error;

/// Error type that captures common tracker failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Unknown season: {0}")]
    UnknownSeason(String),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}
