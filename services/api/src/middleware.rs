//! Authentication middleware for bearer session tokens
//!
//! A request moves through the gate as follows: without a bearer credential
//! it is rejected with "No token provided"; with a token unknown to the
//! session table (or expired) it is rejected with "Invalid token"; otherwise
//! the resolved [`AuthSession`] is attached to the request extensions and
//! the handler runs.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::warn;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Authenticated session information
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user_id: Uuid,
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(ApiError::MissingToken)?;
    let token = bearer.token();

    let session = state
        .store
        .sessions
        .validate_token(token)
        .await
        .ok_or_else(|| {
            warn!(path = %req.uri().path(), "Rejected unknown session token");
            ApiError::InvalidToken
        })?;

    req.extensions_mut().insert(AuthSession {
        token: session.token,
        user_id: session.user_id,
    });

    Ok(next.run(req).await)
}
