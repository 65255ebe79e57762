// file: src/ai/chat.rs
// description: Azure OpenAI chat completion client
// reference: https://learn.microsoft.com/azure/ai-services/openai/reference

use crate::config::OpenAiConfig;
use crate::error::{PipelineError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an Azure OpenAI chat deployment.
///
/// Errors propagate to the caller; each pipeline decides whether to
/// swallow them (summarization) or abort the run (intake workflow).
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
}

impl ChatClient {
    pub fn new(config: OpenAiConfig, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            api_version: config.api_version,
            deployment: config.deployment,
        })
    }

    /// Run one chat completion and return the trimmed assistant text.
    pub async fn complete(&self, messages: Vec<ChatMessage>, temperature: f32) -> Result<String> {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint, self.deployment
        );

        let request = ChatRequest {
            messages,
            temperature,
        };

        debug!(
            "Chat completion request to deployment '{}' (temperature {})",
            self.deployment, temperature
        );

        let response = self
            .client
            .post(&url)
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::Service {
                service: "Azure OpenAI",
                status,
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(PipelineError::EmptyResponse {
                service: "Azure OpenAI",
            })
    }
}
