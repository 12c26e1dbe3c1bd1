//! Auth API handlers

use crate::domain::CreateUserInput;
use crate::error::Result;
use crate::server::AppState;
use crate::service::auth::LoginInput;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Register a new user and return an access token
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> Result<impl IntoResponse> {
    let response = state.auth_service.register(input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Validate credentials and return an access token
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<impl IntoResponse> {
    let response = state.auth_service.login(input).await?;
    Ok(Json(response))
}
