//! Terminal output formatting.

use bigo_core::AnalysisResult;
use colored::Colorize;

/// Print an analysis result.
pub fn print_analysis(language: &str, result: &AnalysisResult) {
    if result.is_error() {
        println!("{} {}", "✗".red().bold(), "Analysis failed".red().bold());
        println!();
        println!("  {}", result.time_explanation);
        println!("  {}", result.space_explanation.dimmed());
        return;
    }

    println!(
        "{} {}",
        "Complexity".cyan().bold(),
        format!("({})", language).dimmed()
    );
    println!();
    println!("{}:  {}", "Time".bold(), result.time.green().bold());
    println!("  {}", result.time_explanation);
    println!();
    println!("{}: {}", "Space".bold(), result.space.green().bold());
    println!("  {}", result.space_explanation);
}
