//! Load command implementation
//!
//! This module implements the `load` command for ingesting the CSV
//! dataset into MongoDB.

use crate::cli::commands::exit_code_for;
use crate::config::load_config;
use crate::core::load::LoadCoordinator;
use clap::Args;

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Override the CSV source path
    #[arg(long)]
    pub source: Option<String>,

    /// Override the insert batch size
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Fail when no identifier column is present instead of warning
    #[arg(long)]
    pub strict_id: bool,
}

impl LoadArgs {
    /// Execute the load command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting load command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(source) = &self.source {
            tracing::info!(source = %source, "Overriding source path from CLI");
            config.source.path = source.clone();
        }

        if let Some(batch_size) = self.batch_size {
            tracing::info!(batch_size, "Overriding batch size from CLI");
            config.load.batch_size = batch_size;
        }

        if self.strict_id {
            tracing::info!("Enabling strict identifier validation from CLI");
            config.source.strict_id = true;
        }

        // Validate configuration after overrides
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Load Configuration:");
            println!("  Source: {}", config.source.path);
            println!(
                "  Target: {}/{} on {}:{}",
                config.mongodb.database,
                config.mongodb.collection,
                config.mongodb.host,
                config.mongodb.port
            );
            println!("  Batch size: {}", config.load.batch_size);
            println!();
            print!("This clears the target collection before inserting. Proceed? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Load cancelled.");
                return Ok(0);
            }
        }

        // Execute the load
        tracing::info!("Executing load");
        println!("🚀 Starting load...");
        println!();

        let coordinator = LoadCoordinator::new(config);
        let summary = match coordinator.execute().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Load failed");
                eprintln!("Load failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        // Display summary
        println!();
        println!("📊 Load Summary:");
        println!("  Rows read: {}", summary.rows_read);
        println!("  Batches: {}", summary.batch_count);
        println!("  Documents cleared: {}", summary.documents_cleared);
        println!("  Documents inserted: {}", summary.documents_inserted);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        // Determine exit code
        let exit_code = if summary.is_complete() {
            println!("✅ Load completed successfully!");
            0
        } else {
            println!("⚠️  Load completed with a row/document mismatch");
            1 // Partial success
        };

        Ok(exit_code)
    }
}
