//! Analysis domain models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentinel placed in `time` and `space` when no real analysis is available.
pub const ERROR_SENTINEL: &str = "Error";

/// A code snippet submitted for analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
}

impl AnalysisRequest {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

/// Structured complexity analysis returned by the model.
///
/// Every field is always populated, including the error sentinels built by
/// [`AnalysisResult::not_configured`] and [`AnalysisResult::failure`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "AnalysisOutput")]
pub struct AnalysisResult {
    /// Time complexity in Big O notation, e.g. "O(n log n)"
    pub time: String,
    /// Short explanation of how the time complexity was derived
    pub time_explanation: String,
    /// Space complexity in Big O notation, e.g. "O(1)"
    pub space: String,
    /// Short explanation of how the space complexity was derived
    pub space_explanation: String,
}

impl AnalysisResult {
    /// Sentinel returned when no model client could be initialized.
    pub fn not_configured() -> Self {
        Self {
            time: ERROR_SENTINEL.to_string(),
            time_explanation: "Server-side model is not configured.".to_string(),
            space: ERROR_SENTINEL.to_string(),
            space_explanation: "Please check the server logs.".to_string(),
        }
    }

    /// Sentinel returned when the model call or its output parsing failed.
    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self {
            time: ERROR_SENTINEL.to_string(),
            time_explanation: "Failed to analyze code. The code may be incomplete or invalid."
                .to_string(),
            space: ERROR_SENTINEL.to_string(),
            space_explanation: format!("Server error: {}", message),
        }
    }

    /// Whether this result is one of the error sentinels.
    pub fn is_error(&self) -> bool {
        self.time == ERROR_SENTINEL && self.space == ERROR_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_uses_camel_case_on_the_wire() {
        let result = AnalysisResult {
            time: "O(n)".to_string(),
            time_explanation: "single pass".to_string(),
            space: "O(1)".to_string(),
            space_explanation: "constant extra memory".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["timeExplanation"], "single pass");
        assert_eq!(obj["spaceExplanation"], "constant extra memory");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = serde_json::from_str::<AnalysisResult>(r#"{"time":"O(n)","space":"O(1)"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let err = serde_json::from_str::<AnalysisResult>(
            r#"{"time":1,"timeExplanation":"a","space":"O(1)","spaceExplanation":"b"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"time":"O(n)","timeExplanation":"a","space":"O(1)","spaceExplanation":"b","notes":"x"}"#,
        )
        .unwrap();
        assert_eq!(result.time, "O(n)");
    }

    #[test]
    fn test_not_configured_sentinel() {
        let result = AnalysisResult::not_configured();
        assert!(result.is_error());
        assert_eq!(result.time_explanation, "Server-side model is not configured.");
        assert_eq!(result.space_explanation, "Please check the server logs.");
    }

    #[test]
    fn test_failure_sentinel_embeds_message() {
        let result = AnalysisResult::failure("connection refused");
        assert!(result.is_error());
        assert_eq!(
            result.time_explanation,
            "Failed to analyze code. The code may be incomplete or invalid."
        );
        assert_eq!(result.space_explanation, "Server error: connection refused");
    }

    #[test]
    fn test_request_deserializes() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"code":"for i in range(n): pass","language":"python"}"#)
                .unwrap();
        assert_eq!(req, AnalysisRequest::new("python", "for i in range(n): pass"));
    }
}
