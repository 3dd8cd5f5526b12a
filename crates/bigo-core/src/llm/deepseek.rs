//! DeepSeek chat completion client.
//!
//! Talks to the OpenAI-compatible `/chat/completions` endpoint and returns the
//! first choice's message text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatModel, ModelConfig};
use crate::error::{CoreError, CoreResult};
use crate::prompt::Prompt;

/// Client for the DeepSeek chat API.
#[derive(Clone)]
pub struct DeepSeekClient {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    stream: bool,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl DeepSeekClient {
    /// Create a client from configuration.
    ///
    /// Fails when no usable API key is present.
    pub fn new(config: &ModelConfig) -> CoreResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CoreError::config("DEEPSEEK_API_KEY is not set"))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CoreError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }
}

#[async_trait]
impl ChatModel for DeepSeekClient {
    async fn complete(&self, prompt: &Prompt) -> CoreResult<String> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            stream: false,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        };

        debug!(model = %self.model, "Calling DeepSeek chat API");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
            .ok_or(CoreError::EmptyCompletion)?;

        debug!(chars = text.len(), "Received completion");
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
