//! Caller-side parsing of user-supplied input strings.
//!
//! The catalog only ever sees parsed values; a parse failure aborts the
//! operation that requested the input and leaves the catalog untouched.

use crate::domain::AppError;

/// Parse a price entered as free text.
pub fn parse_price(input: &str) -> Result<f64, AppError> {
    let trimmed = input.trim();
    trimmed.parse::<f64>().map_err(|_| AppError::InvalidPrice(trimmed.to_string()))
}

/// Parse an item ID entered as free text.
pub fn parse_id(input: &str) -> Result<u64, AppError> {
    let trimmed = input.trim();
    trimmed.parse::<u64>().map_err(|_| AppError::InvalidId(trimmed.to_string()))
}
