//! Generation error types.

use thiserror::Error;

/// Errors that can occur while generating marketing content.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The external service could not be reached or rejected the call.
    #[error("Generation service error: {0}")]
    Service(String),

    /// The service answered, but not with the declared JSON shape.
    #[error("Malformed output: {0}")]
    MalformedOutput(String),

    /// Anything that does not fit the categories above.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GenerationError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Service(_) => "service",
            GenerationError::MalformedOutput(_) => "malformed_output",
            GenerationError::Internal(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::MalformedOutput(err.to_string())
    }
}

/// Convenience type alias for generation results.
pub type Result<T> = std::result::Result<T, GenerationError>;
