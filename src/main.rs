//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `gitlab_env` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing summary output (on stderr; stdout belongs to the
//!   export lines)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use gitlab_env::initialization::init_logger_with;
use gitlab_env::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows keeping GITLAB_API_TOKEN in .env without exporting it manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the export using the library
    match run_export(config).await {
        Ok(report) => {
            // Summary goes to stderr so `eval "$(gitlab_env ...)"` only
            // sees the export lines
            eprintln!(
                "Exported {} variable{} across {} page{} in {:.1}s",
                report.records,
                if report.records == 1 { "" } else { "s" },
                report.pages,
                if report.pages == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("gitlab_env error: {:#}", e);
            process::exit(1);
        }
    }
}
