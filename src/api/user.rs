//! User API handlers

use crate::domain::CreateUserInput;
use crate::error::Result;
use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Create a user
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all farmers
pub async fn farmers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let farmers = state.user_service.list_farmers().await?;
    Ok(Json(farmers))
}
