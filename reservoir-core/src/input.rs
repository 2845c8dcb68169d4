//! Validation of user-typed injection rates, done before a solver is built.

use crate::error::InputError;

pub fn parse_injection_rate(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::Parse {
        text: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NonFinite(value));
    }
    if value < 0.0 {
        return Err(InputError::Negative(value));
    }
    Ok(value)
}
