// Cohort - CSV to MongoDB batch loader
// Copyright (c) 2025 Cohort Contributors
// Licensed under the MIT License

use clap::Parser;
use cohort::cli::{Cli, Commands};
use cohort::config::load_config;
use cohort::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Logging settings come from the configuration file when it loads.
    // A broken config falls back to console defaults here; the command
    // itself reports the load error with the configuration exit code.
    let logging_config = load_config(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    let log_level = cli.log_level.as_deref().unwrap_or(&logging_config.level);

    // The guard keeps the file-logging worker alive for the process
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Cohort - CSV to MongoDB batch loader"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Load(args) => args.execute(&cli.config).await,
        Commands::Check(args) => args.execute(&cli.config).await,
        Commands::Status(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
