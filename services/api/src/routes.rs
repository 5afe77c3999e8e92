//! API service routes

mod auth;
mod cars;
mod reports;
mod users;

use std::any::Any;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use fleet_common::{EntityKind, validation::Validate};
use tracing::debug;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{
    error::ApiError, middleware::auth_middleware, models::HealthResponse, state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/profile", get(auth::get_profile).put(auth::update_profile))
        .route("/logout", post(auth::logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .route("/login", post(auth::login));

    let mut admin_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/cars", get(cars::list_cars).post(cars::create_car))
        .route(
            "/cars/:id",
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
        .route(
            "/reports",
            get(reports::list_reports).post(reports::create_report),
        )
        .route(
            "/reports/:id",
            get(reports::get_report)
                .put(reports::update_report)
                .delete(reports::delete_report),
        );

    if state.config.require_auth_for_admin {
        admin_routes = admin_routes.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));
    }

    let api_routes = Router::new().nest("/auth", auth_routes).merge(admin_routes);

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    let router = if state.config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: "fleet-api",
        timestamp: Utc::now(),
    })
}

/// Turn a handler panic into the generic server error
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(detail).into_response()
}

/// Parse a path identifier; anything that is not a UUID names no record
fn parse_id(raw: &str, kind: EntityKind) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(kind))
}

/// Unwrap a JSON body and run its schema checks
///
/// Every failure collapses to the generic invalid-data error for `kind`; the
/// detail only goes to the debug log.
fn validated<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
    kind: EntityKind,
) -> Result<T, ApiError> {
    let Json(value) = payload.map_err(|e| {
        debug!("Rejected {} payload: {}", kind.noun(), e);
        ApiError::InvalidData(kind)
    })?;

    value.validate().map_err(|e| {
        debug!("Rejected {} payload: {}", kind.noun(), e);
        ApiError::InvalidData(kind)
    })?;

    Ok(value)
}
