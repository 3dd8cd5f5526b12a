//! Complexity analysis over a remote chat model.

pub mod model;

use std::sync::Arc;

use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::llm::{ChatModel, DeepSeekClient, ModelConfig};
use crate::prompt::{build_prompt, extract_json};
use model::{AnalysisRequest, AnalysisResult};

/// Runs analyses against an optional, read-only model client.
#[derive(Clone)]
pub struct Analyzer {
    model: Option<Arc<dyn ChatModel>>,
}

impl Analyzer {
    /// Create an analyzer backed by the given model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Create an analyzer with no model; every analysis yields the
    /// not-configured sentinel.
    pub fn unconfigured() -> Self {
        Self { model: None }
    }

    /// Build the DeepSeek-backed analyzer, degrading to [`Analyzer::unconfigured`]
    /// when the client cannot be initialized.
    pub fn from_config(config: &ModelConfig) -> Self {
        match DeepSeekClient::new(config) {
            Ok(client) => {
                info!(model = %config.model, base_url = %config.base_url, "Model client initialized");
                Self::new(Arc::new(client))
            }
            Err(e) => {
                warn!(error = %e, "Error initializing model client; /analyze will report it as not configured");
                Self::unconfigured()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Analyze the request, surfacing the failure kind.
    pub async fn try_analyze(&self, request: &AnalysisRequest) -> CoreResult<AnalysisResult> {
        let model = self.model.as_ref().ok_or(CoreError::NotConfigured)?;

        let span = info_span!(
            "analyze",
            request_id = %Uuid::new_v4(),
            language = %request.language,
            model = model.name(),
        );

        async move {
            let prompt = build_prompt(&request.language, &request.code);
            let text = model.complete(&prompt).await?;
            let result = parse_output(&text)?;
            info!(time = %result.time, space = %result.space, "Analysis complete");
            Ok::<_, CoreError>(result)
        }
        .instrument(span)
        .await
    }

    /// Analyze the request, absorbing every failure into a sentinel result.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        match self.try_analyze(request).await {
            Ok(result) => result,
            Err(e) => sentinel_for(&e),
        }
    }
}

/// Parse model text as an [`AnalysisResult`], trying the raw text before
/// unwrapping markdown fences or surrounding prose.
fn parse_output(text: &str) -> CoreResult<AnalysisResult> {
    if let Ok(result) = serde_json::from_str(text.trim()) {
        return Ok(result);
    }
    Ok(serde_json::from_str(extract_json(text))?)
}

/// Map an analysis error to its sentinel result, logging failed calls.
pub fn sentinel_for(err: &CoreError) -> AnalysisResult {
    if err.is_not_configured() {
        return AnalysisResult::not_configured();
    }
    error!(error = %err, "Error during analysis");
    AnalysisResult::failure(err)
}
