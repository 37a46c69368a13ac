//! Generation client trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::request::GenerationRequest;

/// Sends a [`GenerationRequest`] to a text-generation service.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Provider name, used in logs.
    fn name(&self) -> &str;

    /// Performs one generation call and returns the raw reply text.
    ///
    /// Implementations must not retry.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

const CANNED_REPLY: &str = r#"{"video_script":"[Scene] Product close-up.","poster_content":"Try it today.","email_content":"Hello! Meet our new product.","tagline":"Made for you."}"#;

#[derive(Debug, Clone)]
enum StubReply {
    Text(String),
    ServiceError(String),
    InternalError(String),
}

#[derive(Debug)]
struct StubState {
    reply: StubReply,
    calls: usize,
    last_request: Option<GenerationRequest>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            reply: StubReply::Text(CANNED_REPLY.to_string()),
            calls: 0,
            last_request: None,
        }
    }
}

/// In-memory generation client for testing.
///
/// Replies with a valid four-field JSON document until told otherwise.
#[derive(Debug, Clone, Default)]
pub struct StubGenerationClient {
    state: Arc<RwLock<StubState>>,
}

impl StubGenerationClient {
    /// Creates a stub that returns a canned valid reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent calls return `text` verbatim.
    pub fn set_reply_text(&self, text: impl Into<String>) {
        self.state.write().unwrap().reply = StubReply::Text(text.into());
    }

    /// Makes subsequent calls fail as if the service rejected them.
    pub fn set_service_error(&self, message: impl Into<String>) {
        self.state.write().unwrap().reply = StubReply::ServiceError(message.into());
    }

    /// Makes subsequent calls fail with an unclassified error.
    pub fn set_internal_error(&self, message: impl Into<String>) {
        self.state.write().unwrap().reply = StubReply::InternalError(message.into());
    }

    /// Returns how many times `generate` has been called.
    pub fn call_count(&self) -> usize {
        self.state.read().unwrap().calls
    }

    /// Returns the request passed to the most recent call.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.state.read().unwrap().last_request.clone()
    }
}

#[async_trait]
impl GenerationClient for StubGenerationClient {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let mut state = self.state.write().unwrap();
        state.calls += 1;
        state.last_request = Some(request.clone());

        match &state.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::ServiceError(msg) => Err(GenerationError::Service(msg.clone())),
            StubReply::InternalError(msg) => Err(GenerationError::Internal(msg.clone())),
        }
    }
}
