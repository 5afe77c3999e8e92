//! Custom error types for the common library
//!
//! This module defines the errors raised by the record store and by payload
//! validation. Both are mapped to HTTP responses by the API service.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// The entity collections held by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Car,
    Report,
}

impl EntityKind {
    /// Lowercase noun used in client-facing messages
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Car => "car",
            EntityKind::Report => "report",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Car => "Car",
            EntityKind::Report => "Report",
        };
        f.write_str(name)
    }
}

/// Fields that must be unique within their collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Username,
    Email,
    LicensePlate,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UniqueField::Username => "Username",
            UniqueField::Email => "Email",
            UniqueField::LicensePlate => "License plate",
        };
        f.write_str(name)
    }
}

/// Error type for record store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The targeted record does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: Uuid },

    /// A write would break a uniqueness constraint
    #[error("{field} already exists: {value}")]
    Conflict { field: UniqueField, value: String },
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: Uuid) -> Self {
        StoreError::NotFound { kind, id }
    }

    pub fn conflict(field: UniqueField, value: impl Into<String>) -> Self {
        StoreError::Conflict {
            field,
            value: value.into(),
        }
    }
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for creation and patch payload validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank
    #[error("{0} is required")]
    Required(&'static str),

    /// A field is present but malformed
    #[error("{field} is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
