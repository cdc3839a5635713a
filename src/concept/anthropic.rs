//! Anthropic Messages API client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConceptGenerator;
use super::parse::parse_concept_reply;
use crate::catalog::ProductConcept;
use crate::config::ApiConfig;
use crate::foundation::error::GenerationError;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";
const ERROR_BODY_LIMIT: usize = 512;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    pub(crate) fn first_text(self) -> Result<String, GenerationError> {
        self.content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| GenerationError::MalformedReply("reply has no text block".to_string()))
    }
}

/// Blocking client for one-shot concept generation.
pub struct AnthropicGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    api_key: Option<String>,
}

impl AnthropicGenerator {
    pub fn from_config(api: &ApiConfig) -> Result<Self, GenerationError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GenerationError::Transport(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: format!("{}/v1/messages", api.base_url.trim_end_matches('/')),
            model: api.model.clone(),
            max_tokens: api.max_tokens,
            api_key: api.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send `prompt` as the single user message and return the first text block.
    pub fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerationError::MissingCredentials);
        };
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "requesting concept");
        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: truncate_chars(&body, ERROR_BODY_LIMIT),
            });
        }

        let envelope: MessagesResponse = resp
            .json()
            .map_err(|e| GenerationError::MalformedReply(format!("response envelope: {e}")))?;
        envelope.first_text()
    }
}

impl ConceptGenerator for AnthropicGenerator {
    fn generate(&self, prompt: &str) -> Result<ProductConcept, GenerationError> {
        let text = self.complete(prompt)?;
        parse_concept_reply(&text)
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/concept/anthropic.rs"]
mod tests;
