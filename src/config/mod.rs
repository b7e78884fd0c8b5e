//! Configuration management for Cohort.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Cohort uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `COHORT_*` environment variable overrides
//! - Type-safe configuration structs
//!
//! The configuration file itself is optional: every key has a default, so
//! the tool can run with no file at all and be steered entirely through
//! environment variables.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cohort::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("cohort.toml")?;
//!
//! // Access configuration sections
//! println!("CSV source: {}", config.source.path);
//! println!("Target: {}/{}", config.mongodb.database, config.mongodb.collection);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`SourceConfig`] - CSV input (path, seed file, required columns)
//! - [`MongoDbConfig`] - MongoDB connection, credentials and retry policy
//! - [`LoadConfig`] - Load pipeline settings (batch size)
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [source]
//! path = "data/healthcare_dataset.csv"
//! required_columns = ["Name", "Age", "Gender"]
//!
//! [mongodb]
//! host = "localhost"
//! port = 27017
//! database = "medical_records"
//! collection = "patients"
//! username = "appuser"
//! password = "${COHORT_MONGODB_PASSWORD}"
//!
//! [load]
//! batch_size = 2000
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for substitution inside the file, or
//! `COHORT_<SECTION>_<KEY>` variables to override any value:
//!
//! ```bash
//! export COHORT_MONGODB_HOST="mongo"
//! export COHORT_MONGODB_PASSWORD="secret-password"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, DEFAULT_CONFIG_PATH};
pub use schema::{
    CohortConfig, LoadConfig, LoggingConfig, MongoDbConfig, RetryConfig, SourceConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
