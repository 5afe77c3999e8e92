//! Shared library for the fleet admin console
//!
//! This crate holds the domain models, payload validation, the in-memory
//! record store and the service configuration. It has no HTTP dependency;
//! the API service layers its routes on top of it.

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{EntityKind, StoreError, StoreResult, UniqueField, ValidationError};
pub use store::RecordStore;
