//! Prompt construction for complexity analysis.
//!
//! The system message pins the model to JSON-only output and embeds format
//! instructions generated from the [`AnalysisResult`] schema, so the parser and
//! the prompt always describe the same shape.

use std::sync::OnceLock;

use schemars::schema_for;
use serde::Serialize;

use crate::analysis::model::AnalysisResult;

const SYSTEM_TEMPLATE: &str = r#"You are an expert algorithm analyst. Your sole purpose is to analyze a given code snippet and return its time and space complexity in Big O notation.

You MUST provide your output *only* in the following JSON format. Do not include *any* other text, markdown, greetings, or explanations outside of the JSON structure.

{format_instructions}"#;

const FORMAT_PREAMBLE: &str = r#"The output should be formatted as a JSON instance that conforms to the JSON schema below.

As an example, for the schema {"properties": {"foo": {"title": "Foo", "description": "a list of strings", "type": "array", "items": {"type": "string"}}}, "required": ["foo"]}
the object {"foo": ["bar", "baz"]} is a well-formatted instance of the schema. The object {"properties": {"foo": ["bar", "baz"]}} is not well-formatted.

Here is the output schema:"#;

/// A rendered two-part chat prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the analysis prompt for a snippet written in `language`.
///
/// The code is wrapped in `<code>` markers and is otherwise passed through
/// untouched.
pub fn build_prompt(language: &str, code: &str) -> Prompt {
    Prompt {
        system: SYSTEM_TEMPLATE.replace("{format_instructions}", format_instructions()),
        user: format!(
            "Analyze the following code snippet, written in {}:\n\n<code>\n{}\n</code>\n",
            language, code
        ),
    }
}

/// Format instructions describing the expected output schema.
pub fn format_instructions() -> &'static str {
    static INSTRUCTIONS: OnceLock<String> = OnceLock::new();
    INSTRUCTIONS.get_or_init(|| {
        format!("{}\n```\n{}\n```", FORMAT_PREAMBLE, output_schema_json())
    })
}

/// The `properties`/`required` view of the generated schema, pretty-printed.
fn output_schema_json() -> String {
    let schema = serde_json::to_value(schema_for!(AnalysisResult)).expect("schema serializes");
    let reduced = serde_json::json!({
        "properties": schema["properties"],
        "required": schema["required"],
    });
    serde_json::to_string_pretty(&reduced).expect("schema serializes")
}

/// Extract JSON from a string that might be wrapped in markdown code blocks.
///
/// Callers should try the raw text first: a valid object whose strings contain
/// backticks would be cut here.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    // ```<tag> ... ``` blocks; the tag, if any, ends at the first newline
    if let Some(start) = trimmed.find("```") {
        let after_marker = &trimmed[start + 3..];
        if let Some(end) = after_marker.find("```") {
            let block = &after_marker[..end];
            let body = match block.find('\n') {
                Some(nl) if !block[..nl].trim_start().starts_with('{') => &block[nl + 1..],
                _ => block,
            };
            return body.trim();
        }
    }

    // First { to last }
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if end > start {
            return &trimmed[start..=end];
        }
    }

    trimmed
}
