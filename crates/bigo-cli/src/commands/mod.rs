//! CLI command definitions and handlers.

use anyhow::Result;
use bigo_core::{llm, ModelConfig};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

pub mod analyze;
pub mod serve;

/// bigo - Big O complexity analysis backed by a hosted language model
#[derive(Parser)]
#[command(name = "bigo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Remote model settings shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// DeepSeek API key
    #[arg(long, global = true, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the chat completion API
    #[arg(long, global = true, env = "DEEPSEEK_BASE_URL", default_value = llm::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Chat model name
    #[arg(long, global = true, env = "DEEPSEEK_MODEL", default_value = llm::DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature
    #[arg(long, global = true, default_value_t = 0.0)]
    pub temperature: f32,

    /// Request timeout in seconds (defaults to the HTTP client's own)
    #[arg(long, global = true, env = "BIGO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl ModelArgs {
    pub fn to_config(&self) -> ModelConfig {
        ModelConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),

    /// Analyze a single file or stdin
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.model.to_config();

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
        }
    }
}
