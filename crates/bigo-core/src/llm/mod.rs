//! Chat model clients.
//!
//! The analyzer talks to the remote model only through [`ChatModel`], so tests
//! and alternative providers can substitute their own implementation.

pub mod deepseek;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::prompt::Prompt;

pub use deepseek::DeepSeekClient;

/// Default DeepSeek API URL.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// A remote text-completion service.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Submit the prompt and return the raw completion text.
    async fn complete(&self, prompt: &Prompt) -> CoreResult<String>;

    /// Model identifier used in logs.
    fn name(&self) -> &str;
}

/// Settings for the remote chat model.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            timeout: None,
        }
    }
}

impl ModelConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
