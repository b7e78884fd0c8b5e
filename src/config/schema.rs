//! Configuration schema types
//!
//! This module defines the configuration structure for Cohort.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Cohort configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every key has a default so the tool can run from environment variables
/// alone, without a configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CohortConfig {
    /// Input dataset settings
    #[serde(default)]
    pub source: SourceConfig,

    /// MongoDB connection settings
    #[serde(default)]
    pub mongodb: MongoDbConfig,

    /// Load pipeline settings
    #[serde(default)]
    pub load: LoadConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CohortConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.source.validate()?;
        self.mongodb.validate()?;
        self.load.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Input dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Optional seed file copied to `path` when `path` does not exist yet
    #[serde(default)]
    pub seed_path: Option<String>,

    /// Path of the CSV file to load
    #[serde(default = "default_source_path")]
    pub path: String,

    /// Columns that must be present in the header row
    #[serde(default = "default_required_columns")]
    pub required_columns: Vec<String>,

    /// Fail when no identifier column is found instead of warning
    #[serde(default)]
    pub strict_id: bool,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.is_empty() {
            return Err("source.path cannot be empty".to_string());
        }

        if let Some(seed) = &self.seed_path {
            if seed.is_empty() {
                return Err("source.seed_path cannot be empty when set".to_string());
            }
        }

        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            path: default_source_path(),
            required_columns: default_required_columns(),
            strict_id: false,
        }
    }
}

/// Retry configuration for the connection phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of connection attempts
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Initial delay between attempts in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Maximum delay between attempts in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Backoff multiplier (1.0 = fixed delay)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("mongodb.retry.max_attempts must be >= 1".to_string());
        }

        if self.backoff_multiplier < 1.0 {
            return Err(format!(
                "mongodb.retry.backoff_multiplier must be >= 1.0, got {}",
                self.backoff_multiplier
            ));
        }

        if self.max_delay_ms < self.initial_delay_ms {
            return Err(format!(
                "mongodb.retry.max_delay_ms ({}) must be >= initial_delay_ms ({})",
                self.max_delay_ms, self.initial_delay_ms
            ));
        }

        Ok(())
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

/// MongoDB connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoDbConfig {
    /// Server hostname
    #[serde(default = "default_mongo_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_mongo_port")]
    pub port: u16,

    /// Target database name
    #[serde(default = "default_mongo_database")]
    pub database: String,

    /// Target collection name
    #[serde(default = "default_mongo_collection")]
    pub collection: String,

    /// Username for authenticated access (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for authenticated access (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Database to authenticate against
    #[serde(default = "default_auth_source")]
    pub auth_source: String,

    /// Require credentials: missing username/password becomes a
    /// configuration error instead of an anonymous connection
    #[serde(default)]
    pub auth_required: bool,

    /// Server selection timeout per connection attempt, in milliseconds
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,

    /// Connection retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl MongoDbConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.host.is_empty() {
            return Err("mongodb.host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("mongodb.port must be between 1 and 65535".to_string());
        }

        if self.database.is_empty() {
            return Err("mongodb.database cannot be empty".to_string());
        }

        if self.collection.is_empty() {
            return Err("mongodb.collection cannot be empty".to_string());
        }

        if self.server_selection_timeout_ms == 0 {
            return Err("mongodb.server_selection_timeout_ms must be > 0".to_string());
        }

        let has_username = self
            .username
            .as_ref()
            .map(|u| !u.is_empty())
            .unwrap_or(false);
        let has_password = self
            .password
            .as_ref()
            .map(|p| !p.expose_secret().is_empty())
            .unwrap_or(false);

        // Credentials come as a pair or not at all
        if has_username != has_password {
            return Err(
                "mongodb.username and mongodb.password must be provided together".to_string(),
            );
        }

        if self.auth_required && !has_username {
            return Err(
                "mongodb.auth_required is set but no username/password pair is configured"
                    .to_string(),
            );
        }

        if has_username && self.auth_source.is_empty() {
            return Err("mongodb.auth_source cannot be empty when credentials are set".to_string());
        }

        self.retry.validate()?;
        Ok(())
    }

    /// Check whether a username/password pair is configured
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            host: default_mongo_host(),
            port: default_mongo_port(),
            database: default_mongo_database(),
            collection: default_mongo_collection(),
            username: None,
            password: None,
            auth_source: default_auth_source(),
            auth_required: false,
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
            retry: RetryConfig::default(),
        }
    }
}

/// Load pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Maximum number of records per insert batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl LoadConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("load.batch_size must be >= 1".to_string());
        }
        Ok(())
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON file logging in addition to console output
    #[serde(default)]
    pub file_enabled: bool,

    /// Log file directory
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// Log rotation strategy
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.file_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.file_rotation '{}'. Must be one of: {}",
                self.file_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.file_enabled && self.file_path.is_empty() {
            return Err("logging.file_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_path: default_log_path(),
            file_rotation: default_log_rotation(),
        }
    }
}

// Default value functions
fn default_source_path() -> String {
    "data/healthcare_dataset.csv".to_string()
}

fn default_required_columns() -> Vec<String> {
    vec!["Name".to_string(), "Age".to_string(), "Gender".to_string()]
}

fn default_mongo_host() -> String {
    "localhost".to_string()
}

fn default_mongo_port() -> u16 {
    27017
}

fn default_mongo_database() -> String {
    "medical_records".to_string()
}

fn default_mongo_collection() -> String {
    "patients".to_string()
}

fn default_auth_source() -> String {
    "admin".to_string()
}

fn default_server_selection_timeout_ms() -> u64 {
    2000
}

fn default_max_attempts() -> usize {
    10
}

fn default_initial_delay_ms() -> u64 {
    2000
}

fn default_max_delay_ms() -> u64 {
    30000
}

fn default_backoff_multiplier() -> f64 {
    1.0
}

fn default_batch_size() -> usize {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
