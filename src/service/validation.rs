//! Identifier parsing and range checks.

use crate::error::AppError;

pub const INVALID_ID_MESSAGE: &str = "please provide a valid identifier";

/// Parse a path segment as a base-10 identifier.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.into()))
}

/// Coarse bound check against `[1, max]`. Passing does not mean the row exists:
/// deleted ids below the current maximum still pass. With no rows there is no upper
/// bound, so the lookup itself reports the id as missing.
pub fn check_range(id: i64, max: Option<i64>) -> Result<(), AppError> {
    let above_max = max.is_some_and(|max| id > max);
    if id < 1 || above_max {
        return Err(AppError::OutOfRange { id, max });
    }
    Ok(())
}

/// A new record must be addressable afterwards, so its id has to be at least 1.
pub fn validate_new_id(id: i64) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::BadRequest(format!(
            "pokemon id must be a positive integer, got {}",
            id
        )));
    }
    Ok(())
}
