//! YASF scene graph normalizer CLI
//!
//! A thin glue layer over `yasf-normalizer`: two file paths in, one
//! normalized scene document out.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use yasf_normalizer::normalize_file;

/// Flatten inline node references in a YASF scene document
#[derive(Parser, Debug)]
#[command(name = "yasf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input scene document (JSON)
    input: PathBuf,

    /// Output path for the normalized document
    output: PathBuf,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    println!(
        "{} {}",
        "🧹 Normalizing scene graph in".bright_blue().bold(),
        cli.input.display()
    );

    let stats = normalize_file(&cli.input, &cli.output)?;

    println!(
        "  {} {} nodes visited, {} rewritten, {} references extracted",
        "✓".green(),
        stats.nodes_visited,
        stats.nodes_rewritten,
        stats.refs_extracted
    );
    println!("{} Wrote {}", "✅".green(), cli.output.display());

    Ok(())
}
