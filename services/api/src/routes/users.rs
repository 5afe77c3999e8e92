//! User administration routes

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use fleet_common::{
    EntityKind,
    models::{NewUser, User, UserPatch},
};

use super::{parse_id, validated};
use crate::{
    error::{ApiError, ApiResult},
    models::MessageResponse,
    state::AppState,
};

const KIND: EntityKind = EntityKind::User;

/// Get all users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.users.get_all().await)
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id, KIND)?;
    let user = state
        .store
        .users
        .get(id)
        .await
        .ok_or(ApiError::NotFound(KIND))?;

    Ok(Json(user))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_user = validated(payload, KIND)?;
    let user = state.store.users.create(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user by ID
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id, KIND)?;
    let patch = validated(payload, KIND)?;
    let user = state.store.users.update(id, patch).await?;
    Ok(Json(user))
}

/// Delete a user by ID, revoking their sessions
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, KIND)?;

    if state.store.delete_user(id).await {
        Ok(Json(MessageResponse::new("User deleted successfully")))
    } else {
        Err(ApiError::NotFound(KIND))
    }
}
