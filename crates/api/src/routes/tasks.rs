//! Task history and generation endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::TaskId;
use generation::{GenerationClient, MarketingContent};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

/// Body of `POST /api/generate_task`.
///
/// The camel-case aliases are accepted alongside the front end's field names.
#[derive(Deserialize)]
pub struct GenerateTaskRequest {
    #[serde(alias = "id")]
    pub uid: String,
    #[serde(alias = "promptText")]
    pub prompt: String,
    #[serde(alias = "audienceText")]
    pub audience: String,
    #[serde(default, alias = "optionalImageBase64")]
    pub image_base64: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct TaskHistoryResponse {
    pub success: bool,
    pub tasks: Vec<serde_json::Value>,
}

#[derive(Serialize)]
pub struct GenerateTaskResponse {
    pub success: bool,
    pub message: &'static str,
    pub task_id: TaskId,
    pub output: MarketingContent,
}

// -- Handlers --

/// GET /api/tasks/:uid: history is not kept, so this is always empty.
pub async fn list(Path(_uid): Path<String>) -> Json<TaskHistoryResponse> {
    Json(TaskHistoryResponse {
        success: true,
        tasks: Vec::new(),
    })
}

/// POST /api/generate_task: generates marketing copy for the demo account.
#[tracing::instrument(skip(state, req), fields(uid = %req.uid))]
pub async fn generate<C: GenerationClient + 'static>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<GenerateTaskRequest>,
) -> Result<Json<GenerateTaskResponse>, ApiError> {
    state.account.authorize(&req.uid)?;

    let output = state
        .generator
        .generate(&req.prompt, &req.audience, req.image_base64.as_deref())
        .await?;

    let task_id = TaskId::new();
    tracing::info!(%task_id, "task generated");

    Ok(Json(GenerateTaskResponse {
        success: true,
        message: "Task generated successfully (not saved to DB).",
        task_id,
        output,
    }))
}
