//! Car routes

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use fleet_common::{
    EntityKind,
    models::{Car, CarPatch, NewCar},
};

use super::{parse_id, validated};
use crate::{
    error::{ApiError, ApiResult},
    models::MessageResponse,
    state::AppState,
};

const KIND: EntityKind = EntityKind::Car;

/// Get all cars
pub async fn list_cars(State(state): State<AppState>) -> Json<Vec<Car>> {
    Json(state.store.cars.get_all().await)
}

/// Get a car by ID
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Car>> {
    let id = parse_id(&id, KIND)?;
    let car = state
        .store
        .cars
        .get(id)
        .await
        .ok_or(ApiError::NotFound(KIND))?;

    Ok(Json(car))
}

/// Register a new car
pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<NewCar>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_car = validated(payload, KIND)?;
    let car = state.store.cars.create(new_car).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// Update a car by ID
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CarPatch>, JsonRejection>,
) -> ApiResult<Json<Car>> {
    let id = parse_id(&id, KIND)?;
    let patch = validated(payload, KIND)?;
    let car = state.store.cars.update(id, patch).await?;
    Ok(Json(car))
}

/// Delete a car by ID
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, KIND)?;

    if state.store.cars.delete(id).await {
        Ok(Json(MessageResponse::new("Car deleted successfully")))
    } else {
        Err(ApiError::NotFound(KIND))
    }
}
