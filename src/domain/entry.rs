use chrono::{Datelike, Local};
use thiserror::Error;

use super::season::Season;

/// Crop names must fit the fixed-width display and the unescaped file format.
pub const MAX_CROP_NAME_LEN: usize = 15;

/// One farming-season financial record.
///
/// `year` defaults to the current calendar year and `income` starts at zero;
/// income is filled in later through the additive update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonEntry {
    pub season: Season,
    pub crop: String,
    pub year: i32,
    pub expenses: f64,
    pub income: f64,
}

impl SeasonEntry {
    /// Builds a fresh entry for the current calendar year with zero income.
    ///
    /// Callers pass an already-validated crop name and a non-negative expense
    /// amount; the shell owns that validation.
    pub fn new(season: Season, crop: impl Into<String>, expenses: f64) -> Self {
        Self {
            season,
            crop: crop.into(),
            year: Local::now().year(),
            expenses,
            income: 0.0,
        }
    }

    pub fn profit(&self) -> f64 {
        self.income - self.expenses
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_profit(self.profit())
    }
}

/// Derived profit classification for an entry or an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Profit,
    Loss,
    BreakEven,
}

impl Outcome {
    pub fn from_profit(profit: f64) -> Self {
        if profit > 0.0 {
            Outcome::Profit
        } else if profit < 0.0 {
            Outcome::Loss
        } else {
            Outcome::BreakEven
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Profit => "Profit",
            Outcome::Loss => "Loss",
            Outcome::BreakEven => "Break-even",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crop-name rejection reasons surfaced to the shell's re-prompt loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropNameError {
    #[error("Crop name cannot be empty.")]
    Empty,
    #[error("Crop name too long. Maximum {MAX_CROP_NAME_LEN} characters allowed.")]
    TooLong,
    #[error("Invalid crop name. Please use letters only.")]
    InvalidCharacters,
}

/// Validates a crop name: non-empty, at most [`MAX_CROP_NAME_LEN`] characters,
/// ASCII letters and spaces only. Pure so the retry loop can live in the shell.
pub fn validate_crop_name(name: &str) -> Result<(), CropNameError> {
    if name.is_empty() {
        return Err(CropNameError::Empty);
    }
    if name.chars().count() > MAX_CROP_NAME_LEN {
        return Err(CropNameError::TooLong);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(CropNameError::InvalidCharacters);
    }
    Ok(())
}
