//! Domain error types
//!
//! This module defines the error hierarchy for Cohort. All errors are
//! domain-specific and don't expose third-party types.

use crate::domain::record::IDENTIFIER_CANDIDATES;
use thiserror::Error;

/// Main Cohort error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CohortError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file does not exist
    #[error("Source file not found: {path}")]
    SourceNotFound {
        /// Path that was checked
        path: String,
    },

    /// Input is not valid delimited text
    #[error("CSV parse error: {0}")]
    Parse(String),

    /// Dataset has zero records where at least one is required
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Required columns are absent from the header row
    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema {
        /// Every required column that is absent, in required-list order
        missing: Vec<String>,
    },

    /// Strict mode found no identifier column
    #[error(
        "No identifier column found; expected one of: {}",
        IDENTIFIER_CANDIDATES.join(", ")
    )]
    MissingIdentifierColumn,

    /// A record's identifier value is missing or blank
    #[error("Row {row} has a missing or blank value for identifier column '{column}'")]
    RequiredField {
        /// Zero-based index of the first offending record
        row: usize,
        /// Identifier column name
        column: String,
    },

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// MongoDB-specific errors
///
/// Errors that occur when interacting with the storage sink.
/// These errors don't expose driver types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to establish a connection
    #[error("Failed to connect to MongoDB: {0}")]
    ConnectionFailed(String),

    /// Connection attempts exhausted
    #[error("MongoDB unreachable after {attempts} connection attempts")]
    ConnectionTimeout {
        /// Number of attempts made before giving up
        attempts: usize,
    },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Failed to clear the target collection
    #[error("Failed to clear collection: {0}")]
    ClearFailed(String),

    /// Failed to insert a batch
    #[error("Failed to insert batch {batch}: {message}")]
    InsertFailed {
        /// Zero-based batch index
        batch: usize,
        /// Driver diagnostic
        message: String,
    },

    /// Failed to count documents
    #[error("Failed to count documents: {0}")]
    CountFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CohortError {
    fn from(err: std::io::Error) -> Self {
        CohortError::Io(err.to_string())
    }
}

// Conversion from csv parse errors
impl From<csv::Error> for CohortError {
    fn from(err: csv::Error) -> Self {
        CohortError::Parse(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CohortError {
    fn from(err: toml::de::Error) -> Self {
        CohortError::Config(format!("TOML parse error: {err}"))
    }
}
