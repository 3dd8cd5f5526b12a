//! Centralized error types for bigo.

use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Model client is not configured")]
    NotConfigured,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to model service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Model returned an empty completion")]
    EmptyCompletion,

    #[error("Invalid JSON output: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for bigo operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error stems from missing configuration rather than a failed call.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }
}
