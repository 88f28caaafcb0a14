//! Prompt plumbing for the two shell modes.
//!
//! Interactive mode asks through dialoguer on the terminal; script mode
//! consumes one stdin line per prompt so integration tests can drive the
//! binary. The retry-on-invalid loops live here, on top of the pure checks
//! in [`super::validate`].

use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Input};

use crate::domain::{validate_crop_name, Season};
use crate::errors::TrackerError;

use super::{output, validate};

/// Where prompt answers come from.
pub enum PromptSource {
    Interactive(ColorfulTheme),
    Script(Box<dyn BufRead>),
}

impl PromptSource {
    pub fn interactive() -> Self {
        Self::Interactive(ColorfulTheme::default())
    }

    pub fn script(reader: impl BufRead + 'static) -> Self {
        Self::Script(Box::new(reader))
    }

    /// One raw answer for `label`; `None` means the input is exhausted.
    pub fn text(&mut self, label: &str) -> Result<Option<String>, TrackerError> {
        match self {
            PromptSource::Interactive(theme) => {
                let value = Input::<String>::with_theme(theme)
                    .with_prompt(label)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(Some(value))
            }
            PromptSource::Script(reader) => {
                println!("{label}:");
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
            }
        }
    }
}

/// Prompts until the answer parses as a choice in `0..=max`.
pub fn prompt_choice(
    source: &mut PromptSource,
    label: &str,
    max: usize,
) -> Result<Option<usize>, TrackerError> {
    loop {
        let Some(raw) = source.text(label)? else {
            return Ok(None);
        };
        match validate::parse_choice(&raw, max) {
            Ok(choice) => return Ok(Some(choice)),
            Err(message) => output::warning(message),
        }
    }
}

/// Prompts until the answer parses as a choice in `min..=max`.
pub fn prompt_choice_in(
    source: &mut PromptSource,
    label: &str,
    min: usize,
    max: usize,
) -> Result<Option<usize>, TrackerError> {
    loop {
        let Some(raw) = source.text(label)? else {
            return Ok(None);
        };
        match validate::parse_choice_in(&raw, min, max) {
            Ok(choice) => return Ok(Some(choice)),
            Err(message) => output::warning(message),
        }
    }
}

/// Prompts until the answer is a non-negative amount.
pub fn prompt_amount(
    source: &mut PromptSource,
    label: &str,
) -> Result<Option<f64>, TrackerError> {
    loop {
        let Some(raw) = source.text(label)? else {
            return Ok(None);
        };
        match validate::parse_amount(&raw) {
            Ok(amount) => return Ok(Some(amount)),
            Err(message) => output::warning(message),
        }
    }
}

/// Prompts until the answer is a valid crop name.
pub fn prompt_crop_name(source: &mut PromptSource) -> Result<Option<String>, TrackerError> {
    loop {
        let Some(raw) = source.text("Enter crop name")? else {
            return Ok(None);
        };
        match validate_crop_name(&raw) {
            Ok(()) => return Ok(Some(raw)),
            Err(err) => output::warning(err),
        }
    }
}

/// Shows the fixed 1-4 season picker and returns the chosen season.
pub fn prompt_season_pick(source: &mut PromptSource) -> Result<Option<Season>, TrackerError> {
    println!("Select season:");
    for (index, season) in Season::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, season);
    }
    let Some(choice) = prompt_choice_in(source, "Enter your choice (1-4)", 1, 4)? else {
        return Ok(None);
    };
    Ok(Some(Season::ALL[choice - 1]))
}

/// Free-text prompt with no validation, used for season/crop name matching
/// where an unknown name is a zero-result outcome rather than an error.
pub fn prompt_line(
    source: &mut PromptSource,
    label: &str,
) -> Result<Option<String>, TrackerError> {
    source.text(label)
}
