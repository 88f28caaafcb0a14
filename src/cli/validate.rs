//! Pure input validation. The shell owns the re-prompt loops; these
//! functions only decide accept or reject, so they are testable on their own.

/// Parses a menu choice in `0..=max`. The rejection message doubles as the
/// re-prompt text.
pub fn parse_choice(input: &str, max: usize) -> Result<usize, String> {
    match input.trim().parse::<usize>() {
        Ok(value) if value <= max => Ok(value),
        Ok(_) | Err(_) => Err(format!(
            "Invalid input. Please enter a number between 0 and {max}."
        )),
    }
}

/// Parses a choice in `min..=max` for sub-menus that do not offer 0.
pub fn parse_choice_in(input: &str, min: usize, max: usize) -> Result<usize, String> {
    match input.trim().parse::<usize>() {
        Ok(value) if (min..=max).contains(&value) => Ok(value),
        Ok(_) | Err(_) => Err(format!(
            "Invalid choice. Please enter a number between {min} and {max}."
        )),
    }
}

/// Parses a non-negative monetary amount.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(value) if value >= 0.0 => Ok(value),
        Ok(_) | Err(_) => Err("Invalid input. Please enter a non-negative number.".to_string()),
    }
}
