//! Front-end document.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use generation::GenerationClient;

use crate::state::AppState;

pub const INDEX_MISSING: &str = "Error: index.html not found.";

/// GET /: serves the configured HTML file, or a 500 when it cannot be read.
#[tracing::instrument(skip(state))]
pub async fn serve<C: GenerationClient + 'static>(State(state): State<Arc<AppState<C>>>) -> Response {
    match tokio::fs::read_to_string(&state.index_path).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(path = %state.index_path.display(), error = %err, "failed to read index document");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(INDEX_MISSING)).into_response()
        }
    }
}
