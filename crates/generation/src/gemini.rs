//! Google Gemini client.
//!
//! Calls the `generateContent` REST endpoint with a JSON response schema so
//! the model answers with the declared object instead of free text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::GenerationClient;
use crate::error::{GenerationError, Result};
use crate::request::{GenerationRequest, ResponseSchema};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Sampling temperature used for every marketing request.
pub const TEMPERATURE: f64 = 0.8;

/// Connection settings for [`GeminiClient`].
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl GeminiConfig {
    /// Default model, endpoint and timeout for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

// The key must never reach the logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Gemini-backed [`GenerationClient`].
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

// Request structures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    response_mime_type: &'static str,
    response_schema: Value,
}

// Response structures
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}

impl GeminiClient {
    /// Creates a new Gemini client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(GenerationError::Internal("Gemini API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GenerationError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn build_body<'a>(request: &'a GenerationRequest) -> GeminiRequest<'a> {
        let mut parts = vec![Part::Text {
            text: &request.user_prompt,
        }];
        if let Some(image) = &request.image {
            parts.push(Part::Inline {
                inline_data: InlineData {
                    mime_type: &image.mime_type,
                    data: &image.data,
                },
            });
        }

        GeminiRequest {
            contents: vec![Content {
                role: Some("user"),
                parts,
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: &request.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                response_mime_type: "application/json",
                response_schema: gemini_schema(&request.schema),
            },
        }
    }
}

/// Gemini's schema dialect uses upper-case OpenAPI type names.
fn gemini_schema(schema: &ResponseSchema) -> Value {
    let mut rendered = schema.to_json_schema();
    uppercase_types(&mut rendered);
    rendered
}

fn uppercase_types(value: &mut Value) {
    if let Value::Object(map) = value {
        for (key, child) in map.iter_mut() {
            if key == "type" {
                if let Value::String(name) = child {
                    *name = name.to_uppercase();
                }
            } else {
                uppercase_types(child);
            }
        }
    }
}

fn map_transport_error(err: reqwest::Error, timeout_seconds: u64) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Service(format!("request timed out after {timeout_seconds} seconds"))
    } else {
        GenerationError::Service(err.to_string())
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        debug!(has_image = request.image.is_some(), "calling Gemini generateContent");

        let body = Self::build_body(request);
        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.config.timeout_seconds))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => match envelope.error.status {
                    Some(code) => format!("{code}: {}", envelope.error.message),
                    None => envelope.error.message,
                },
                Err(_) => text,
            };
            return Err(GenerationError::Service(format!("API error {status}: {detail}")));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| map_transport_error(e, self.config.timeout_seconds))?;

        let Some(candidate) = gemini_response.candidates.into_iter().next() else {
            let reason = gemini_response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "unknown".to_string());
            return Err(GenerationError::Service(format!(
                "no candidates returned (block reason: {reason})"
            )));
        };

        // Concatenate every text part of the first candidate.
        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        // The service answered, so an empty reply is a shape problem, not a transport one.
        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(GenerationError::MalformedOutput(format!(
                "candidate contained no text (finish reason: {reason})"
            )));
        }

        debug!(bytes = text.len(), "Gemini reply received");
        Ok(text)
    }
}
