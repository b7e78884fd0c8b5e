//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Loading order: file contents (with `${VAR}` substitution), then
//! `COHORT_*` environment overrides, then validation. The default
//! configuration file is optional so the tool can run from environment
//! variables alone.

use super::schema::CohortConfig;
use crate::config::secret_string;
use crate::domain::errors::CohortError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Path probed when no `--config` argument is given
pub const DEFAULT_CONFIG_PATH: &str = "cohort.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file (a missing file is only an error when the path
///    differs from [`DEFAULT_CONFIG_PATH`]; the default file may simply
///    not exist yet, in which case built-in defaults are used)
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CohortConfig
/// 4. Applies environment variable overrides (COHORT_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly requested file does not exist or cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cohort::config::loader::load_config;
///
/// let config = load_config("cohort.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CohortConfig> {
    let path = path.as_ref();

    let mut config = if path.exists() {
        // Read file contents
        let contents = fs::read_to_string(path).map_err(|e| {
            CohortError::Config(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        // Perform environment variable substitution
        let contents = substitute_env_vars(&contents)?;

        // Parse TOML
        toml::from_str(&contents)
            .map_err(|e| CohortError::Config(format!("Failed to parse TOML: {}", e)))?
    } else if path == Path::new(DEFAULT_CONFIG_PATH) {
        tracing::debug!(
            path = %path.display(),
            "No configuration file found, using built-in defaults"
        );
        CohortConfig::default()
    } else {
        return Err(CohortError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    };

    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config
        .validate()
        .map_err(|e| CohortError::Config(format!("Configuration validation failed: {}", e)))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CohortError::Config(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the COHORT_* prefix
///
/// Environment variables follow the pattern: COHORT_<SECTION>_<KEY>
/// For example: COHORT_MONGODB_HOST, COHORT_LOAD_BATCH_SIZE
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut CohortConfig) -> Result<()> {
    // Source overrides
    if let Ok(val) = std::env::var("COHORT_SOURCE_PATH") {
        config.source.path = val;
    }
    if let Ok(val) = std::env::var("COHORT_SOURCE_SEED_PATH") {
        config.source.seed_path = Some(val);
    }
    if let Ok(val) = std::env::var("COHORT_SOURCE_STRICT_ID") {
        config.source.strict_id = parse_bool_var("COHORT_SOURCE_STRICT_ID", &val)?;
    }

    // MongoDB overrides
    if let Ok(val) = std::env::var("COHORT_MONGODB_HOST") {
        config.mongodb.host = val;
    }
    if let Ok(val) = std::env::var("COHORT_MONGODB_PORT") {
        config.mongodb.port = val
            .parse()
            .map_err(|_| CohortError::Config(format!("Invalid COHORT_MONGODB_PORT: {}", val)))?;
    }
    if let Ok(val) = std::env::var("COHORT_MONGODB_DATABASE") {
        config.mongodb.database = val;
    }
    if let Ok(val) = std::env::var("COHORT_MONGODB_COLLECTION") {
        config.mongodb.collection = val;
    }
    if let Ok(val) = std::env::var("COHORT_MONGODB_USERNAME") {
        config.mongodb.username = Some(val);
    }
    if let Ok(val) = std::env::var("COHORT_MONGODB_PASSWORD") {
        config.mongodb.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("COHORT_MONGODB_AUTH_SOURCE") {
        config.mongodb.auth_source = val;
    }
    if let Ok(val) = std::env::var("COHORT_MONGODB_AUTH_REQUIRED") {
        config.mongodb.auth_required = parse_bool_var("COHORT_MONGODB_AUTH_REQUIRED", &val)?;
    }

    // Load overrides
    if let Ok(val) = std::env::var("COHORT_LOAD_BATCH_SIZE") {
        config.load.batch_size = val
            .parse()
            .map_err(|_| CohortError::Config(format!("Invalid COHORT_LOAD_BATCH_SIZE: {}", val)))?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("COHORT_LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("COHORT_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = parse_bool_var("COHORT_LOGGING_FILE_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("COHORT_LOGGING_FILE_PATH") {
        config.logging.file_path = val;
    }

    Ok(())
}

/// Parses a boolean override, rejecting anything that is not a clear
/// true/false spelling so typos do not silently flip behavior
fn parse_bool_var(name: &str, val: &str) -> Result<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CohortError::Config(format!(
            "Invalid {}: '{}' (expected true or false)",
            name, val
        ))),
    }
}
