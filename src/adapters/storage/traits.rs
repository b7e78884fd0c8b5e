//! Storage abstraction traits
//!
//! This module defines the trait that storage adapters must implement to
//! receive batches from the load pipeline.

use crate::domain::{Record, Result};
use async_trait::async_trait;

/// Destination for validated, formatted records
///
/// The load coordinator drives a `DocumentSink` through the idempotent
/// load protocol: one `clear`, then `insert_batch` per batch in order,
/// then `close`. Implementations own their connection; dropping a sink
/// without `close` must release resources too, since error paths drop.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Remove every document from the target collection
    ///
    /// Returns the number of documents deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete operation fails.
    async fn clear(&self) -> Result<u64>;

    /// Insert one batch of records
    ///
    /// `batch` is the zero-based batch index, used only in diagnostics.
    /// Returns the number of documents inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails; records already inserted by
    /// earlier calls are unaffected.
    async fn insert_batch(&self, batch: usize, records: &[Record]) -> Result<usize>;

    /// Count documents currently in the target collection
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    async fn document_count(&self) -> Result<u64>;

    /// Release the underlying connection
    ///
    /// Consumes the sink; no further operations are possible after close.
    async fn close(self: Box<Self>);
}
