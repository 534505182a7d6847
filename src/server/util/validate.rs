//! Field validation for incoming payloads.
//!
//! Each check returns `AppError::BadRequest` naming the offending field.

use crate::server::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

const MIN_PHONE_DIGITS: usize = 9;
const MAX_PHONE_DIGITS: usize = 15;

/// Rejects empty or whitespace-only text.
pub fn non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Accepts `local@domain` with a non-empty local part and a dotted domain.
pub fn email(value: &str) -> Result<(), AppError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid email address",
            value
        )));
    }

    Ok(())
}

pub fn password(value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

/// Accepts 9 to 15 digits with an optional leading `+`.
pub fn phone(value: &str) -> Result<(), AppError> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let valid = digits.chars().all(|c| c.is_ascii_digit())
        && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len());

    if !valid {
        return Err(AppError::BadRequest(format!(
            "phone must contain {} to {} digits",
            MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
        )));
    }

    Ok(())
}

/// Rejects negative counters such as goals or cards.
pub fn non_negative(field: &str, value: i32) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::BadRequest(format!("{} must not be negative", field)));
    }

    Ok(())
}

pub fn amount(value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(
            "amount must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}
