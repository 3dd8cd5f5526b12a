//! Web server command.

use anyhow::Result;
use bigo_core::{Analyzer, ModelConfig};
use bigo_web::AppState;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "BIGO_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "BIGO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Report failed analyses with 502/503 instead of 200
    #[arg(long, env = "BIGO_STRICT_STATUS")]
    pub strict_status: bool,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (used with --log)
    #[arg(long, default_value = "bigo-serve.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, config: &ModelConfig) -> Result<()> {
    let analyzer = Analyzer::from_config(config);
    let configured = analyzer.is_configured();
    let state = AppState::new(analyzer).with_strict_status(args.strict_status);

    println!();
    println!("  {} {}", "bigo".cyan().bold(), "Complexity Analyzer".bold());
    println!();
    println!("  {}   http://{}:{}/", "Health".green(), args.host, args.port);
    println!("  {}  http://{}:{}/analyze", "Analyze".green(), args.host, args.port);
    if configured {
        println!("  {}    {}", "Model".green(), config.model);
    } else {
        println!(
            "  {}    {}",
            "Model".yellow(),
            "not configured (set DEEPSEEK_API_KEY)".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    bigo_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
