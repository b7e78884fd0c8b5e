//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod check;
pub mod init;
pub mod load;
pub mod status;

use crate::domain::{CohortError, StorageError};

/// Map a pipeline error to its process exit code
///
/// 2 = configuration, 3 = source validation, 4 = connection,
/// 5 = fatal storage or I/O failure.
pub(crate) fn exit_code_for(error: &CohortError) -> i32 {
    match error {
        CohortError::Config(_) => 2,
        CohortError::SourceNotFound { .. }
        | CohortError::Parse(_)
        | CohortError::EmptyDataset
        | CohortError::Schema { .. }
        | CohortError::MissingIdentifierColumn
        | CohortError::RequiredField { .. } => 3,
        CohortError::Storage(storage) => match storage {
            StorageError::ConnectionFailed(_)
            | StorageError::ConnectionTimeout { .. }
            | StorageError::AuthenticationFailed(_) => 4,
            StorageError::ClearFailed(_)
            | StorageError::InsertFailed { .. }
            | StorageError::CountFailed(_) => 5,
        },
        CohortError::Io(_) => 5,
    }
}
