//! Load summary and reporting
//!
//! This module defines the accounting structure for a completed load run.

use std::time::Duration;

/// Summary of a load operation
#[derive(Debug, Clone)]
pub struct LoadSummary {
    /// Rows read from the CSV source (after validation)
    pub rows_read: usize,

    /// Number of batches the dataset was partitioned into
    pub batch_count: usize,

    /// Documents removed by the pre-insert clear
    pub documents_cleared: u64,

    /// Documents inserted across all batches
    pub documents_inserted: usize,

    /// Duration of the load
    pub duration: Duration,
}

impl LoadSummary {
    /// Create a new empty load summary
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            batch_count: 0,
            documents_cleared: 0,
            documents_inserted: 0,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check that every row read ended up inserted
    pub fn is_complete(&self) -> bool {
        self.documents_inserted == self.rows_read
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            rows = self.rows_read,
            batches = self.batch_count,
            cleared = self.documents_cleared,
            inserted = self.documents_inserted,
            duration_secs = self.duration.as_secs(),
            "Load completed"
        );
    }
}

impl Default for LoadSummary {
    fn default() -> Self {
        Self::new()
    }
}
