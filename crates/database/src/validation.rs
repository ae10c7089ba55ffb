//! Input validation for complaint fields.
//!
//! These are pure functions with no dependency on the HTTP layer, so the
//! API and any other caller can share them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::NewComplaint;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid phone number format.
    InvalidPhoneNumber(String),
    /// Invalid email format.
    InvalidEmail(String),
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidPhoneNumber(msg) => write!(f, "Invalid phone number: {}", msg),
            ValidationError::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation failure tied to the request field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field name as it appears in the request body.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, error: ValidationError) -> Self {
        Self {
            field: field.to_string(),
            message: error.to_string(),
        }
    }
}

/// Maximum allowed length for email addresses.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Required number of digits in a phone number.
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Validate that a required field is non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field.to_string()));
    }
    Ok(())
}

/// Validate a phone number.
///
/// The trimmed value must be exactly 10 ASCII digits and start with 6, 7, 8
/// or 9. Surrounding whitespace is accepted on purpose, since the stored
/// value is the trimmed one; a strict full-match on the raw input would
/// reject `" 9876543210 "`.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Empty("phone_number".to_string()));
    }

    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhoneNumber(
            "must contain only digits".to_string(),
        ));
    }

    if phone.len() != PHONE_NUMBER_DIGITS {
        return Err(ValidationError::InvalidPhoneNumber(format!(
            "must be exactly {} digits (got {})",
            PHONE_NUMBER_DIGITS,
            phone.len()
        )));
    }

    if !matches!(phone.as_bytes()[0], b'6'..=b'9') {
        return Err(ValidationError::InvalidPhoneNumber(
            "must start with 6, 7, 8 or 9".to_string(),
        ));
    }

    Ok(())
}

/// Validate an email address (basic RFC 5322 format check).
///
/// This is a basic validation that checks:
/// - Contains exactly one @
/// - Has a local part without whitespace
/// - Has at least one dot after @
/// - Domain does not start or end with a dot, or contain `..`
/// - Is not too long
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Empty("email".to_string()));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LENGTH,
            actual: email.len(),
        });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @ symbol".to_string(),
        ));
    };

    if domain.contains('@') {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @ symbol".to_string(),
        ));
    }

    if local.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing local part (before @)".to_string(),
        ));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail(
            "cannot contain whitespace".to_string(),
        ));
    }

    if domain.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing domain (after @)".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(ValidationError::InvalidEmail(
            "domain must contain at least one dot".to_string(),
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail(
            "domain cannot start or end with a dot".to_string(),
        ));
    }

    if domain.contains("..") {
        return Err(ValidationError::InvalidEmail(
            "domain cannot contain consecutive dots".to_string(),
        ));
    }

    Ok(())
}

/// Validate every field of a new complaint, collecting all violations.
pub fn validate_new_complaint(input: &NewComplaint) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if let Err(e) = validate_required("name", &input.name) {
        violations.push(FieldViolation::new("name", e));
    }
    if let Err(e) = validate_phone_number(&input.phone_number) {
        violations.push(FieldViolation::new("phone_number", e));
    }
    if let Err(e) = validate_email(&input.email) {
        violations.push(FieldViolation::new("email", e));
    }
    if let Err(e) = validate_required("complaint_details", &input.complaint_details) {
        violations.push(FieldViolation::new("complaint_details", e));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
