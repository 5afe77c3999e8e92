//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fleet_common::{EntityKind, StoreError, UniqueField};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// No bearer credential on a protected route
    #[error("No token provided")]
    MissingToken,

    /// Bearer token unknown or expired
    #[error("Invalid token")]
    InvalidToken,

    /// Login with an unknown email or a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Malformed login body
    #[error("Invalid request data")]
    InvalidRequest,

    /// Create or patch payload failed its schema
    #[error("Invalid {} data", .0.noun())]
    InvalidData(EntityKind),

    /// Target record does not exist
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// Write would break a uniqueness constraint
    #[error("{0} already exists")]
    Conflict(UniqueField),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, .. } => ApiError::NotFound(kind),
            StoreError::Conflict { field, .. } => ApiError::Conflict(field),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidToken | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::InvalidRequest | ApiError::InvalidData(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "Server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::InvalidData(EntityKind::Car).to_string(),
            "Invalid car data"
        );
        assert_eq!(
            ApiError::NotFound(EntityKind::Report).to_string(),
            "Report not found"
        );
        assert_eq!(
            ApiError::Conflict(UniqueField::LicensePlate).to_string(),
            "License plate already exists"
        );
    }

    #[test]
    fn test_store_errors_map_to_status() {
        let not_found = ApiError::from(StoreError::not_found(
            EntityKind::User,
            uuid::Uuid::new_v4(),
        ));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = ApiError::from(StoreError::conflict(UniqueField::Email, "a@b.co"));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(conflict.to_string(), "Email already exists");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        use http_body_util::BodyExt;

        let response = ApiError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("JSON body");
        assert_eq!(body, json!({ "message": "Server error" }));
    }
}
