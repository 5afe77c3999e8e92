//! Incident report routes

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use fleet_common::{
    EntityKind,
    models::{NewReport, Report, ReportPatch},
};

use super::{parse_id, validated};
use crate::{
    error::{ApiError, ApiResult},
    models::MessageResponse,
    state::AppState,
};

const KIND: EntityKind = EntityKind::Report;

/// Get all reports
pub async fn list_reports(State(state): State<AppState>) -> Json<Vec<Report>> {
    Json(state.store.reports.get_all().await)
}

/// Get a report by ID
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Report>> {
    let id = parse_id(&id, KIND)?;
    let report = state
        .store
        .reports
        .get(id)
        .await
        .ok_or(ApiError::NotFound(KIND))?;

    Ok(Json(report))
}

/// File a new report
pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<NewReport>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let new_report = validated(payload, KIND)?;
    let report = state.store.reports.create(new_report).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Update a report by ID
pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReportPatch>, JsonRejection>,
) -> ApiResult<Json<Report>> {
    let id = parse_id(&id, KIND)?;
    let patch = validated(payload, KIND)?;
    let report = state.store.reports.update(id, patch).await?;
    Ok(Json(report))
}

/// Delete a report by ID
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, KIND)?;

    if state.store.reports.delete(id).await {
        Ok(Json(MessageResponse::new("Report deleted successfully")))
    } else {
        Err(ApiError::NotFound(KIND))
    }
}
