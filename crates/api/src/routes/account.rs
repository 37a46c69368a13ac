//! Login and the disabled account-management endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::UserId;
use generation::GenerationClient;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub uid: UserId,
}

/// POST /api/login: checks the credentials against the demo account.
#[tracing::instrument(skip(state, req))]
pub async fn login<C: GenerationClient + 'static>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state.account.authenticate(&req.email, &req.password);
    let outcome = if result.is_ok() { "success" } else { "failure" };
    metrics::counter!("login_attempts_total", "outcome" => outcome).increment(1);

    let uid = result?.clone();
    tracing::info!("demo login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        message: "Demo Login successful.",
        uid,
    }))
}

/// POST /api/register: always refused.
pub async fn register() -> ApiError {
    ApiError::Forbidden("Registration disabled in demo mode.".to_string())
}

/// POST /api/update_password: always refused.
pub async fn update_password() -> ApiError {
    ApiError::Forbidden("Password update disabled in demo mode.".to_string())
}
