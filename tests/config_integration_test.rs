//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use cohort::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("COHORT_SOURCE_PATH");
    std::env::remove_var("COHORT_SOURCE_SEED_PATH");
    std::env::remove_var("COHORT_SOURCE_STRICT_ID");
    std::env::remove_var("COHORT_MONGODB_HOST");
    std::env::remove_var("COHORT_MONGODB_PORT");
    std::env::remove_var("COHORT_MONGODB_DATABASE");
    std::env::remove_var("COHORT_MONGODB_COLLECTION");
    std::env::remove_var("COHORT_MONGODB_USERNAME");
    std::env::remove_var("COHORT_MONGODB_PASSWORD");
    std::env::remove_var("COHORT_MONGODB_AUTH_SOURCE");
    std::env::remove_var("COHORT_MONGODB_AUTH_REQUIRED");
    std::env::remove_var("COHORT_LOAD_BATCH_SIZE");
    std::env::remove_var("COHORT_LOGGING_LEVEL");
    std::env::remove_var("COHORT_LOGGING_FILE_ENABLED");
    std::env::remove_var("COHORT_LOGGING_FILE_PATH");
    std::env::remove_var("COHORT_IT_PASSWORD");
    std::env::remove_var("COHORT_IT_UNSET_VAR");
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[source]
path = "data/patients.csv"
seed_path = "/seed/patients.csv"
required_columns = ["Name", "Age", "Gender", "Blood Type"]
strict_id = true

[mongodb]
host = "mongo.example.com"
port = 27018
database = "clinical"
collection = "admissions"
username = "loader"
password = "hunter2"
auth_source = "admin"
auth_required = true
server_selection_timeout_ms = 1500

[mongodb.retry]
max_attempts = 5
initial_delay_ms = 250
max_delay_ms = 4000
backoff_multiplier = 2.0

[load]
batch_size = 1000

[logging]
level = "debug"
file_enabled = false
file_path = "logs"
file_rotation = "hourly"
"#;

    let temp_file = config_file(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify source config
    assert_eq!(config.source.path, "data/patients.csv");
    assert_eq!(config.source.seed_path, Some("/seed/patients.csv".to_string()));
    assert_eq!(config.source.required_columns.len(), 4);
    assert!(config.source.strict_id);

    // Verify MongoDB config
    assert_eq!(config.mongodb.host, "mongo.example.com");
    assert_eq!(config.mongodb.port, 27018);
    assert_eq!(config.mongodb.database, "clinical");
    assert_eq!(config.mongodb.collection, "admissions");
    assert_eq!(config.mongodb.username, Some("loader".to_string()));
    assert_eq!(
        config.mongodb.password.as_ref().unwrap().expose_secret(),
        "hunter2"
    );
    assert_eq!(config.mongodb.auth_source, "admin");
    assert!(config.mongodb.auth_required);
    assert_eq!(config.mongodb.server_selection_timeout_ms, 1500);

    // Verify retry config
    assert_eq!(config.mongodb.retry.max_attempts, 5);
    assert_eq!(config.mongodb.retry.initial_delay_ms, 250);
    assert_eq!(config.mongodb.retry.max_delay_ms, 4000);
    assert_eq!(config.mongodb.retry.backoff_multiplier, 2.0);

    // Verify load config
    assert_eq!(config.load.batch_size, 1000);

    // Verify logging config
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[mongodb]
host = "localhost"
"#;

    let temp_file = config_file(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.source.path, "data/healthcare_dataset.csv");
    assert_eq!(config.source.seed_path, None);
    assert_eq!(
        config.source.required_columns,
        vec!["Name".to_string(), "Age".to_string(), "Gender".to_string()]
    );
    assert!(!config.source.strict_id);
    assert_eq!(config.mongodb.port, 27017);
    assert_eq!(config.mongodb.database, "medical_records");
    assert_eq!(config.mongodb.collection, "patients");
    assert_eq!(config.mongodb.auth_source, "admin");
    assert!(!config.mongodb.auth_required);
    assert_eq!(config.mongodb.server_selection_timeout_ms, 2000);
    assert_eq!(config.mongodb.retry.max_attempts, 10);
    assert_eq!(config.mongodb.retry.initial_delay_ms, 2000);
    assert_eq!(config.mongodb.retry.max_delay_ms, 30000);
    assert_eq!(config.mongodb.retry.backoff_multiplier, 1.0);
    assert_eq!(config.load.batch_size, 2000);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_rotation, "daily");
}

#[test]
fn test_missing_explicit_config_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let result = load_config("/nonexistent/path/cohort-test.toml");

    let err = result.expect_err("Missing explicit config should fail");
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("COHORT_IT_PASSWORD", "secret_pass");

    let toml_content = r#"
[mongodb]
host = "localhost"
username = "loader"
password = "${COHORT_IT_PASSWORD}"
"#;

    let temp_file = config_file(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(
        config.mongodb.password.as_ref().unwrap().expose_secret(),
        "secret_pass"
    );

    std::env::remove_var("COHORT_IT_PASSWORD");
}

#[test]
fn test_env_var_substitution_missing_var_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[mongodb]
host = "localhost"
username = "loader"
password = "${COHORT_IT_UNSET_VAR}"
"#;

    let temp_file = config_file(toml_content);
    let result = load_config(temp_file.path());

    let err = result.expect_err("Unset substitution variable should fail");
    assert!(err
        .to_string()
        .contains("Missing required environment variables"));
    assert!(err.to_string().contains("COHORT_IT_UNSET_VAR"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("COHORT_MONGODB_HOST", "db.example.com");
    std::env::set_var("COHORT_LOAD_BATCH_SIZE", "750");
    std::env::set_var("COHORT_SOURCE_STRICT_ID", "true");

    let toml_content = r#"
[mongodb]
host = "localhost"

[load]
batch_size = 2000
"#;

    let temp_file = config_file(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify env var overrides took effect
    assert_eq!(config.mongodb.host, "db.example.com");
    assert_eq!(config.load.batch_size, 750);
    assert!(config.source.strict_id);

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("COHORT_MONGODB_PORT", "not-a-number");

    let toml_content = r#"
[mongodb]
host = "localhost"
"#;

    let temp_file = config_file(toml_content);
    let result = load_config(temp_file.path());

    let err = result.expect_err("Invalid port override should fail");
    assert!(err.to_string().contains("COHORT_MONGODB_PORT"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[load]
batch_size = 0
"#;

    let temp_file = config_file(toml_content);
    let result = load_config(temp_file.path());

    let err = result.expect_err("Zero batch size should fail validation");
    assert!(err.to_string().contains("Configuration validation failed"));
}

#[test]
fn test_auth_required_without_credentials_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[mongodb]
host = "localhost"
auth_required = true
"#;

    let temp_file = config_file(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
}
