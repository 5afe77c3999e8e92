//! HTTP API for the fleet admin console
//!
//! Exposes the record store over JSON routes under `/api`, with bearer
//! session tokens guarding the profile endpoints.

pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
