//! Marketing content generation.
//!
//! This crate turns a product description and a target audience into a
//! request for an external generative-AI service and parses the structured
//! reply:
//!
//! 1. [`GenerationRequest::marketing`] assembles the system instruction, the
//!    user turn and the [`ResponseSchema`] the reply must follow.
//! 2. A [`GenerationClient`] sends it to the service and returns raw text.
//! 3. [`MarketingGenerator`] parses that text into [`MarketingContent`].
//!
//! Failures are reported once and never retried.

pub mod client;
pub mod content;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod request;

pub use client::{GenerationClient, StubGenerationClient};
pub use content::MarketingContent;
pub use error::{GenerationError, Result};
pub use gemini::{GeminiClient, GeminiConfig};
pub use generator::MarketingGenerator;
pub use request::{GenerationRequest, ImageAttachment, ResponseSchema, SchemaField};
