//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use generation::GenerationError;
use thiserror::Error;

use crate::config::ConfigError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Credentials did not match.
    Unauthorized(String),
    /// The operation is not permitted for this caller, or not at all.
    Forbidden(String),
    /// Content generation failed.
    Generation(GenerationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Generation(err) => generation_error_to_response(err),
        };

        let body = serde_json::json!({ "detail": detail });
        (status, axum::Json(body)).into_response()
    }
}

fn generation_error_to_response(err: GenerationError) -> (StatusCode, String) {
    tracing::error!(kind = err.kind(), error = %err, "generation request failed");
    let detail = match err {
        GenerationError::Service(msg) => format!("AI generation failed: {msg}"),
        GenerationError::MalformedOutput(_) => "AI generated invalid content structure.".to_string(),
        GenerationError::Internal(msg) => format!("An unexpected error occurred: {msg}"),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, detail)
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        ApiError::Generation(err)
    }
}

/// Conditions that stop the server before it accepts traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Gemini client initialization failed: {0}")]
    Client(#[from] GenerationError),

    #[error("failed to install metrics recorder: {0}")]
    Metrics(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}
