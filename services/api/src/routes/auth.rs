//! Authentication routes: login, profile and logout

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use fleet_common::{
    EntityKind,
    models::{ProfilePatch, User},
    validation::Validate,
};
use tracing::{debug, info, warn};

use super::validated;
use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthSession,
    models::{LoginRequest, LoginResponse, LoginUser, MessageResponse, ProfileResponse},
    state::AppState,
};

/// User login endpoint
///
/// Unknown email and wrong password produce the same response.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(payload) = payload.map_err(|e| {
        debug!("Rejected login body: {}", e);
        ApiError::InvalidRequest
    })?;
    payload.validate().map_err(|e| {
        debug!("Rejected login body: {}", e);
        ApiError::InvalidRequest
    })?;

    info!("Login attempt for user: {}", payload.email);

    let user = state
        .store
        .users
        .get_by_email(&payload.email)
        .await
        .filter(|user| user.password == payload.password)
        .ok_or_else(|| {
            warn!("Failed login for: {}", payload.email);
            ApiError::InvalidCredentials
        })?;

    state.store.users.touch_last_active(user.id).await?;
    let session = state.store.sessions.create_session(user.id).await;

    Ok(Json(LoginResponse {
        token: session.token,
        user: LoginUser::from(&user),
    }))
}

async fn session_user(state: &AppState, auth: &AuthSession) -> ApiResult<User> {
    state
        .store
        .users
        .get(auth.user_id)
        .await
        .ok_or(ApiError::NotFound(EntityKind::User))
}

/// Get the profile of the session holder
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthSession>,
) -> ApiResult<Json<ProfileResponse>> {
    let user = session_user(&state, &auth).await?;
    Ok(Json(ProfileResponse::from(user)))
}

/// Update the profile of the session holder
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthSession>,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let patch = validated(payload, EntityKind::User)?;
    let user = state.store.users.update(auth.user_id, patch.into()).await?;
    Ok(Json(user))
}

/// Revoke the presented session token
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthSession>,
) -> ApiResult<Json<MessageResponse>> {
    state.store.sessions.revoke_session(&auth.token).await;
    info!(user_id = %auth.user_id, "Logged out");

    Ok(Json(MessageResponse::new("Logged out successfully")))
}
