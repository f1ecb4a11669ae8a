//! Form input parsing.
//!
//! The core accepts only parsed numbers; turning form text into them is the
//! presentation layer's job.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be a number (got {input:?})")]
    Malformed { field: &'static str, input: String },

    #[error("{field} must be a finite number (got {input:?})")]
    NonFinite { field: &'static str, input: String },
}

/// Parse a trimmed decimal field such as a price or a weight.
pub fn parse_number(field: &'static str, input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::Malformed {
        field,
        input: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NonFinite {
            field,
            input: trimmed.to_string(),
        });
    }
    Ok(value)
}
