//! Zone API handlers
//!
//! Update and delete are bearer-gated; the `AuthUser` extractor rejects
//! requests without a valid token before the handler runs.

use crate::domain::{CreateZoneInput, UpdateZoneInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Create a zone owned by the user named in the body
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateZoneInput>,
) -> Result<impl IntoResponse> {
    let zone = state.zone_service.create_zone(input).await?;
    Ok((StatusCode::CREATED, Json(zone)))
}

/// List all zones with owner projections
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let zones = state.zone_service.get_all_zones().await?;
    Ok(Json(zones))
}

/// Get a single zone by ID
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    let zone = state.zone_service.get_zone_by_id(id).await?;
    Ok(Json(zone))
}

/// Annotate a zone (agronomists only)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    requester: AuthUser,
    Json(input): Json<UpdateZoneInput>,
) -> Result<impl IntoResponse> {
    let zone = state.zone_service.update_zone(id, input, &requester).await?;
    Ok(Json(zone))
}

/// Delete a zone (agronomists, or the owning farmer)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    requester: AuthUser,
) -> Result<impl IntoResponse> {
    let response = state.zone_service.delete_zone(id, &requester).await?;
    Ok(Json(response))
}
