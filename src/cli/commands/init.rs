//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cohort.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Cohort configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point [source] path at your CSV dataset");
                println!("  3. For authenticated clusters, create a .env file:");
                println!("     - Set COHORT_MONGODB_USERNAME and COHORT_MONGODB_PASSWORD");
                println!("  4. Check the dataset: cohort check");
                println!("  5. Run the load: cohort load");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Cohort Configuration File
# CSV to MongoDB batch loader

[source]
path = "data/healthcare_dataset.csv"
required_columns = ["Name", "Age", "Gender"]
strict_id = false

[mongodb]
host = "localhost"
port = 27017
database = "medical_records"
collection = "patients"
auth_source = "admin"
auth_required = false
server_selection_timeout_ms = 2000

# Credentials (set via environment, see .env)
# username = "${COHORT_MONGODB_USERNAME}"
# password = "${COHORT_MONGODB_PASSWORD}"

[mongodb.retry]
max_attempts = 10
initial_delay_ms = 2000
max_delay_ms = 30000
backoff_multiplier = 1.0

[load]
batch_size = 2000

[logging]
level = "info"
file_enabled = false
file_path = "logs"
file_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Cohort Configuration File
# CSV to MongoDB batch loader
#
# This file contains all configuration options with examples and explanations.
#
# Every section is optional; omitted keys fall back to the defaults shown
# here. Values of the form ${VAR_NAME} are substituted from the environment
# at load time.

# ============================================================================
# CSV Source
# ============================================================================
[source]
# Path to the CSV dataset to load
path = "data/healthcare_dataset.csv"

# Optional: seed file copied to `path` when `path` does not exist yet.
# Useful for container images that ship the dataset read-only.
# seed_path = "/seed/healthcare_dataset.csv"

# Columns that must be present in the header row
required_columns = ["Name", "Age", "Gender"]

# Require an identifier column (id, ID, Id, patient_id, PatientID,
# patientId) and reject rows with a blank identifier. When false, a
# missing identifier column only logs a warning.
strict_id = false

# ============================================================================
# MongoDB Target
# ============================================================================
[mongodb]
# Server address
host = "localhost"
port = 27017

# Target database and collection
database = "medical_records"
collection = "patients"

# Authentication database for the credentials below
auth_source = "admin"

# Refuse to run without credentials when true
auth_required = false

# Server selection timeout per connection attempt (milliseconds)
server_selection_timeout_ms = 2000

# Credentials (use environment variables, never literals)
# username = "${COHORT_MONGODB_USERNAME}"
# password = "${COHORT_MONGODB_PASSWORD}"

# Connection retry behaviour
[mongodb.retry]
# Maximum connection attempts before giving up
max_attempts = 10

# Delay before the second attempt (milliseconds)
initial_delay_ms = 2000

# Upper bound on the delay between attempts (milliseconds)
max_delay_ms = 30000

# Multiplier applied to the delay after each failed attempt.
# 1.0 keeps a fixed delay; 2.0 doubles it every attempt.
backoff_multiplier = 1.0

# ============================================================================
# Load Behaviour
# ============================================================================
[load]
# Number of documents per insert batch
batch_size = 2000

# ============================================================================
# Logging
# ============================================================================
[logging]
# Log level (trace, debug, info, warn, error)
level = "info"

# Enable JSON file logging in addition to console output
file_enabled = false

# Directory for log files
file_path = "logs"

# Log rotation (daily or hourly)
file_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "cohort.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "cohort.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[source]"));
        assert!(config.contains("[mongodb]"));
        assert!(config.contains("[load]"));
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("# Cohort Configuration File"));
        assert!(config.contains("required_columns"));
        assert!(config.contains("batch_size"));
    }

    #[test]
    fn test_generated_configs_parse() {
        let minimal: toml::Value = toml::from_str(&InitArgs::generate_minimal_config()).unwrap();
        assert!(minimal.get("mongodb").is_some());

        let full: toml::Value = toml::from_str(&InitArgs::generate_config_with_examples()).unwrap();
        assert!(full.get("source").is_some());
    }
}
