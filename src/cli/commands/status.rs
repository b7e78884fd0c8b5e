//! Status command implementation
//!
//! This module implements the `status` command for displaying the
//! target collection's document count.

use crate::adapters::mongodb::{MongoStore, RetryPolicy};
use crate::adapters::storage::DocumentSink;
use crate::cli::commands::exit_code_for;
use crate::config::load_config;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking collection status");

        println!("📊 Collection Status");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Connect with a single probe; status should answer fast
        let policy = RetryPolicy::single_attempt();
        let store = match MongoStore::connect(&config.mongodb, &policy).await {
            Ok(s) => Box::new(s),
            Err(e) => {
                println!("❌ Failed to connect to MongoDB");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let count = match store.document_count().await {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to count documents");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!("  Host: {}:{}", config.mongodb.host, config.mongodb.port);
        println!("  Database: {}", store.database_name());
        println!("  Collection: {}", store.collection_name());
        println!("  Documents: {count}");
        println!();

        store.close().await;
        Ok(0)
    }
}
