//! Input validation utilities

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

/// Payloads that can check their own shape before reaching the store
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validate that a required text field is not blank
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }

    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    validate_required("username", username)?;

    if username.len() < 3 || username.len() > 32 {
        return Err(ValidationError::Invalid {
            field: "username",
            reason: "must be between 3 and 32 characters long",
        });
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+$").expect("Failed to compile username regex")
    });

    if !regex.is_match(username) {
        return Err(ValidationError::Invalid {
            field: "username",
            reason: "can only contain letters, numbers, dots, dashes and underscores",
        });
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    validate_required("email", email)?;

    if email.len() > 254 {
        return Err(ValidationError::Invalid {
            field: "email",
            reason: "must be at most 254 characters long",
        });
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(ValidationError::Invalid {
            field: "email",
            reason: "invalid email format",
        });
    }

    Ok(())
}

/// Validate password
///
/// Passwords are compared as plain text, so the only rule is presence.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required("password"));
    }

    Ok(())
}

/// Validate a decimal-string coordinate within `[-limit, limit]`
pub fn validate_coordinate(
    field: &'static str,
    value: &str,
    limit: f64,
) -> Result<(), ValidationError> {
    let parsed: f64 = value.trim().parse().map_err(|_| ValidationError::Invalid {
        field,
        reason: "must be a decimal number",
    })?;

    if !parsed.is_finite() || parsed.abs() > limit {
        return Err(ValidationError::Invalid {
            field,
            reason: "is out of range",
        });
    }

    Ok(())
}

/// Validate an optional latitude string
pub fn validate_latitude(value: Option<&str>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| validate_coordinate("latitude", v, 90.0))
}

/// Validate an optional longitude string
pub fn validate_longitude(value: Option<&str>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| validate_coordinate("longitude", v, 180.0))
}
