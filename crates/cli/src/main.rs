//! Receipt Processor CLI - Offline receipt scoring.
//!
//! # Usage
//!
//! ```bash
//! # Score one or more receipt files
//! receipt-cli points receipts/target.json
//!
//! # Show per-rule contributions
//! receipt-cli points --breakdown receipts/target.json
//!
//! # Machine-readable output
//! receipt-cli points --json receipts/*.json
//! ```
//!
//! # Commands
//!
//! - `points` - Score receipt JSON files with the same rules as the server

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::points::OutputFormat;

#[derive(Parser)]
#[command(name = "receipt-cli")]
#[command(author, version, about = "Receipt processor CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score receipt JSON files
    Points {
        /// Receipt files to score
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Show the points contributed by each rule
        #[arg(short, long, conflicts_with = "json")]
        breakdown: bool,

        /// Print one JSON object per file
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; results go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Points {
            files,
            breakdown,
            json,
        } => {
            let format = if json {
                OutputFormat::Json
            } else if breakdown {
                OutputFormat::Breakdown
            } else {
                OutputFormat::Summary
            };
            commands::points::run(&files, format).await?;
        }
    }
    Ok(())
}
