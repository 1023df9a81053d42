//! Registration REST API handler

use crate::{ApiResult, AppState, RegisterResponse, RegistrationBody};

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/register
///
/// Register a new user from `{username, password}`
pub async fn register(
    State(state): State<AppState>,
    RegistrationBody(request): RegistrationBody,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let user = state.workflow.register(request).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(user))))
}
