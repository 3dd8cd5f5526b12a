//! One-shot analysis command.

use anyhow::{Context, Result};
use bigo_core::{AnalysisRequest, Analyzer, ModelConfig};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Source file to analyze (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Language label sent to the model (guessed from the extension if omitted)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &ModelConfig) -> Result<()> {
    let code = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read code from stdin")?;
            buf
        }
    };

    let language = args
        .language
        .clone()
        .or_else(|| args.file.as_deref().and_then(guess_language).map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    let analyzer = Analyzer::from_config(config);
    let result = analyzer.analyze(&AnalysisRequest::new(language.as_str(), code)).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_analysis(&language, &result);
    }

    Ok(())
}

/// Guess a language label from a file extension.
fn guess_language(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let language = match ext.as_str() {
        "py" => "python",
        "rs" => "rust",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "java" => "java",
        "kt" => "kotlin",
        "go" => "go",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "swift" => "swift",
        "scala" => "scala",
        "php" => "php",
        _ => return None,
    };
    Some(language)
}
