use super::{GenerationRequest, IdeaProvider};
use crate::config::{CelestoConfig, API_KEY_VAR};
use crate::error::{CelestoError, Result};
use crate::model::Idea;
use crate::schema::parse_ideas;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Chat-completions client for OpenAI and API-compatible servers.
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: CelestoConfig,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAiProvider {
    pub fn new(config: CelestoConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: CelestoConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CelestoConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.schema_name,
                    "strict": true,
                    "schema": request.schema
                }
            }
        })
    }
}

#[async_trait]
impl IdeaProvider for OpenAiProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Idea>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| CelestoError::Provider(format!("{} is not set", API_KEY_VAR)))?;

        let endpoint = self.endpoint();
        tracing::debug!(%endpoint, model = %self.config.model, "sending generation request");

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "generation request rejected");
            return Err(CelestoError::Provider(format!(
                "{} returned {}: {}",
                endpoint,
                status,
                body.trim()
            )));
        }

        let completion: ChatCompletion = response.json().await?;
        let message = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| CelestoError::InvalidResponse("response has no choices".to_string()))?;

        if let Some(refusal) = message.refusal {
            return Err(CelestoError::Provider(format!(
                "model refused the request: {}",
                refusal
            )));
        }

        let content = message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| CelestoError::InvalidResponse("response has no content".to_string()))?;

        let ideas = parse_ideas(&content)?;
        tracing::debug!(count = ideas.len(), "generation request succeeded");
        Ok(ideas)
    }
}
