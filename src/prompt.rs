//! Retry-until-valid field prompts.
//!
//! Each primitive asks for one line, parses it against its constraint, and on
//! failure prints a diagnostic and asks again. There is no retry cap: malformed
//! input is always absorbed by the loop, never surfaced as an error. The only
//! `Err` a primitive propagates comes from the console itself (stop-token abort
//! or exhausted input).

use crate::console::Console;
use crate::error::FleetError;
use crate::model::Categorical;

/// Prompt for a non-empty string. Emptiness is tested on the trimmed line, but
/// the accepted value is returned verbatim, whitespace and all.
pub fn prompt_nonempty(console: &mut dyn Console, prompt: &str) -> Result<String, FleetError> {
    loop {
        let line = console.read_line(prompt)?;
        if line.trim().is_empty() {
            console.write_line("Error: the value cannot be an empty string.");
        } else {
            return Ok(line);
        }
    }
}

/// Prompt for a wide integer within an inclusive `[min, max]` range.
pub fn prompt_i64_in(
    console: &mut dyn Console,
    prompt: &str,
    min: i64,
    max: i64,
) -> Result<i64, FleetError> {
    loop {
        let line = console.read_line(prompt)?;
        match line.trim().parse::<i64>() {
            Ok(value) if value < min || value > max => {
                console.write_line(&format!(
                    "Error: the value must be in the range [{}, {}].",
                    min, max
                ));
            }
            Ok(value) => return Ok(value),
            Err(_) => console.write_line("Error: enter a valid integer."),
        }
    }
}

/// Prompt for a narrow integer within an inclusive `[min, max]` range.
pub fn prompt_i32_in(
    console: &mut dyn Console,
    prompt: &str,
    min: i32,
    max: i32,
) -> Result<i32, FleetError> {
    loop {
        let line = console.read_line(prompt)?;
        match line.trim().parse::<i32>() {
            Ok(value) if value < min || value > max => {
                console.write_line(&format!(
                    "Error: the value must be in the range [{}, {}].",
                    min, max
                ));
            }
            Ok(value) => return Ok(value),
            Err(_) => console.write_line("Error: enter a valid integer."),
        }
    }
}

/// Prompt for a float strictly greater than `min` and at most `max`.
///
/// The lower bound is exclusive, unlike the integer prompts: engine power
/// must be strictly positive.
pub fn prompt_f32_above(
    console: &mut dyn Console,
    prompt: &str,
    min: f32,
    max: f32,
) -> Result<f32, FleetError> {
    loop {
        let line = console.read_line(prompt)?;
        match line.trim().parse::<f32>() {
            Ok(value) if value <= min || value > max => {
                console.write_line(&format!(
                    "Error: the value must be greater than {} and at most {}.",
                    min, max
                ));
            }
            Ok(value) => return Ok(value),
            Err(_) => console.write_line("Error: enter a valid floating-point number."),
        }
    }
}

/// Prompt for an optional enumerated value.
///
/// An empty (all-whitespace) line means "no value" and returns `None` without
/// retrying — the only prompt allowed an absent result. Anything else is
/// matched case-insensitively against the member set; a mismatch prints the
/// full member list and re-asks.
pub fn prompt_categorical<C: Categorical>(
    console: &mut dyn Console,
    prompt: &str,
) -> Result<Option<C>, FleetError> {
    loop {
        let line = console.read_line(prompt)?;
        if line.trim().is_empty() {
            return Ok(None);
        }
        match C::from_token(&line) {
            Some(value) => return Ok(Some(value)),
            None => {
                let members: Vec<&str> = C::variants().iter().map(|v| v.as_str()).collect();
                console.write_line(&format!("Available values: {}", members.join(" ")));
                console.write_line("Error: enter one of the listed values.");
            }
        }
    }
}
