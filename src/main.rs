//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use header_audit::initialization::{init_client, init_logger, load_env_file};
use header_audit::{run_check, Cli, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load DB_* settings from .env (current dir, then next to the executable)
    load_env_file();

    let cli = Cli::parse();

    init_logger().context("Failed to initialize logger")?;

    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("header_audit error: {e}");
            process::exit(1);
        }
    };
    let db = Database::new(db_config);
    let client = init_client().context("Failed to initialize HTTP client")?;

    let mut stdout = std::io::stdout();
    if let Err(e) = run_check(&cli.url, &db, &client, &mut stdout).await {
        eprintln!("header_audit error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
