//! bigo Core Library
//!
//! Complexity analysis of code snippets through a hosted language model:
//! the request/result model, prompt construction and the model client.

pub mod analysis;
pub mod error;
pub mod llm;
pub mod prompt;

pub use analysis::model::{AnalysisRequest, AnalysisResult};
pub use analysis::Analyzer;
pub use error::{CoreError, CoreResult};
pub use llm::{ChatModel, DeepSeekClient, ModelConfig};
pub use prompt::{build_prompt, Prompt};
