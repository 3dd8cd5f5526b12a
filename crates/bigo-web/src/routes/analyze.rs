//! Analysis route handler.

use axum::{extract::State, http::StatusCode, Json};
use bigo_core::{analysis::sentinel_for, AnalysisRequest, AnalysisResult, CoreError};
use tracing::debug;

use crate::state::AppState;

/// POST /analyze - Analyze the complexity of a code snippet.
///
/// The body is always a complete `AnalysisResult`. Failures are reported with
/// 200 unless strict status is enabled.
pub async fn analyze_code(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> (StatusCode, Json<AnalysisResult>) {
    debug!(language = %req.language, code_len = req.code.len(), "Received analysis request");

    match state.analyzer.try_analyze(&req).await {
        Ok(result) => (StatusCode::OK, Json(result)),
        Err(e) => (failure_status(&e, state.strict_status), Json(sentinel_for(&e))),
    }
}

fn failure_status(err: &CoreError, strict: bool) -> StatusCode {
    match (strict, err) {
        (false, _) => StatusCode::OK,
        (true, CoreError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
        (true, _) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_status_lenient() {
        assert_eq!(failure_status(&CoreError::NotConfigured, false), StatusCode::OK);
        assert_eq!(failure_status(&CoreError::EmptyCompletion, false), StatusCode::OK);
    }

    #[test]
    fn test_failure_status_strict() {
        assert_eq!(
            failure_status(&CoreError::NotConfigured, true),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            failure_status(
                &CoreError::Api {
                    status: 500,
                    body: String::new()
                },
                true
            ),
            StatusCode::BAD_GATEWAY
        );
    }
}
