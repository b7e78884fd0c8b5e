//! Result type alias for Cohort
//!
//! This module provides a convenient Result type alias that uses CohortError
//! as the error type.

use super::errors::CohortError;

/// Result type alias for Cohort operations
///
/// This is a convenience type alias that uses `CohortError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use cohort::domain::result::Result;
/// use cohort::domain::errors::CohortError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CohortError::EmptyDataset)
/// }
/// ```
pub type Result<T> = std::result::Result<T, CohortError>;
