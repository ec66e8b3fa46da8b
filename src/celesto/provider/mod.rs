//! # Provider Layer
//!
//! A provider turns one [`GenerationRequest`] into a validated list of
//! [`Idea`]s. The trait keeps the command layer independent of any particular
//! model vendor or HTTP client:
//!
//! - [`openai::OpenAiProvider`]: OpenAI-compatible chat completions with a
//!   strict JSON schema response format
//!
//! Implementations make exactly one outbound request per call and never
//! retry. Every failure is returned to the caller.

use crate::error::Result;
use crate::model::Idea;
use crate::prompt::{idea_prompt, SYSTEM_PROMPT};
use crate::schema::{ideas_schema, SCHEMA_NAME};
use async_trait::async_trait;
use serde_json::Value;

pub mod openai;

/// Everything a provider needs for one structured generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
    pub schema_name: String,
    pub schema: Value,
}

impl GenerationRequest {
    /// The standard idea request: fixed persona, topic prompt, idea schema.
    pub fn for_topic(topic: &str) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            prompt: idea_prompt(topic),
            schema_name: SCHEMA_NAME.to_string(),
            schema: ideas_schema(),
        }
    }
}

#[async_trait]
pub trait IdeaProvider: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Idea>>;
}
