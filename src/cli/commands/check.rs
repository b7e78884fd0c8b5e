//! Check command implementation
//!
//! This module implements the `check` command for validating the CSV
//! dataset without touching storage.

use crate::cli::commands::exit_code_for;
use crate::config::load_config;
use crate::core::load::LoadCoordinator;
use clap::Args;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
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

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Checking dataset");

        println!("🔍 Checking dataset");
        println!();

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(source) = &self.source {
            config.source.path = source.clone();
        }

        if let Some(batch_size) = self.batch_size {
            config.load.batch_size = batch_size;
        }

        if self.strict_id {
            config.source.strict_id = true;
        }

        // Validate configuration after overrides
        if let Err(e) = config.validate() {
            println!("❌ Configuration validation failed");
            println!("   Error: {e}");
            return Ok(2); // Configuration error exit code
        }

        println!("  Source: {}", config.source.path);
        println!("  Required columns: {:?}", config.source.required_columns);
        println!();

        // Run the storage-free half of the pipeline
        let coordinator = LoadCoordinator::new(config);
        match coordinator.prepare() {
            Ok(batches) => {
                let rows: usize = batches.iter().map(Vec::len).sum();
                println!("✅ Dataset is valid");
                println!("  Rows: {rows}");
                println!("  Batches: {}", batches.len());
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Dataset check failed");
                println!("   Error: {e}");
                println!();
                Ok(exit_code_for(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_args_defaults() {
        let args = CheckArgs {
            source: None,
            batch_size: None,
            strict_id: false,
        };

        assert!(args.source.is_none());
        assert!(args.batch_size.is_none());
        assert!(!args.strict_id);
    }

    #[test]
    fn test_check_args_with_overrides() {
        let args = CheckArgs {
            source: Some("data/patients.csv".to_string()),
            batch_size: Some(100),
            strict_id: true,
        };

        assert_eq!(args.source, Some("data/patients.csv".to_string()));
        assert_eq!(args.batch_size, Some(100));
        assert!(args.strict_id);
    }
}
