//! Domain models and types for Cohort.
//!
//! This module contains the core domain models, types, and business rules
//! for Cohort.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The record model** ([`Record`]): one CSV row as an ordered
//!   list of column/value pairs
//! - **The identifier priority list** ([`IDENTIFIER_CANDIDATES`])
//! - **Error types** ([`CohortError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use cohort::domain::{CohortError, Result};
//!
//! fn example(rows: usize) -> Result<()> {
//!     if rows == 0 {
//!         return Err(CohortError::EmptyDataset);
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CohortError, StorageError};
pub use record::{Record, IDENTIFIER_CANDIDATES};
pub use result::Result;
