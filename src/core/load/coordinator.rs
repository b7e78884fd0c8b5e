//! Load coordinator - main orchestrator for the ingestion process
//!
//! This module sequences the whole pipeline: stage, read, validate,
//! format, partition, then drive the storage sink through the idempotent
//! clear-then-insert protocol.

use crate::adapters::csv::{read_dataset, stage_input};
use crate::adapters::mongodb::{MongoStore, RetryPolicy};
use crate::adapters::storage::DocumentSink;
use crate::config::CohortConfig;
use crate::core::batch::partition;
use crate::core::format::format_dataset;
use crate::core::load::summary::LoadSummary;
use crate::core::validate::{validate_content, validate_headers};
use crate::domain::{Record, Result};
use std::time::Instant;

/// Load coordinator
///
/// The pipeline is split in two so tests can run it against an in-memory
/// sink: [`prepare`](Self::prepare) produces the batches without touching
/// storage, [`load_into`](Self::load_into) performs the storage protocol
/// against any [`DocumentSink`].
pub struct LoadCoordinator {
    config: CohortConfig,
}

impl LoadCoordinator {
    /// Create a new load coordinator
    pub fn new(config: CohortConfig) -> Self {
        Self { config }
    }

    /// Run the storage-free half of the pipeline
    ///
    /// Stages the seed file if configured, reads the dataset, validates
    /// headers and content, normalizes values and partitions into batches.
    /// Apart from file IO and the content validator's lenient-path warning
    /// this performs no side effects.
    ///
    /// # Errors
    ///
    /// Propagates the first pipeline failure; see `domain::errors` for the
    /// taxonomy. Nothing is written anywhere on any error path.
    pub fn prepare(&self) -> Result<Vec<Vec<Record>>> {
        stage_input(&self.config.source)?;

        let records = read_dataset(&self.config.source.path)?;

        validate_headers(&records, &self.config.source.required_columns)?;
        validate_content(&records, self.config.source.strict_id)?;

        let formatted = format_dataset(&records);
        let batches = partition(formatted, self.config.load.batch_size)?;

        tracing::info!(
            rows = records.len(),
            batches = batches.len(),
            batch_size = self.config.load.batch_size,
            "Dataset prepared"
        );

        Ok(batches)
    }

    /// Run the idempotent load protocol against a sink
    ///
    /// Clears the target collection once, then inserts batches in order,
    /// logging the running total after each. An insert failure is fatal;
    /// batches already inserted remain in place and the error names the
    /// failed batch.
    ///
    /// # Errors
    ///
    /// Propagates sink failures (`StorageError` wrapped in the domain
    /// error type)
    pub async fn load_into(
        &self,
        sink: &dyn DocumentSink,
        batches: &[Vec<Record>],
    ) -> Result<LoadSummary> {
        let mut summary = LoadSummary::new();
        summary.rows_read = batches.iter().map(Vec::len).sum();
        summary.batch_count = batches.len();

        summary.documents_cleared = sink.clear().await?;

        for (index, batch) in batches.iter().enumerate() {
            let inserted = sink.insert_batch(index, batch).await?;
            summary.documents_inserted += inserted;

            tracing::info!(
                batch = index + 1,
                batches = summary.batch_count,
                batch_rows = batch.len(),
                inserted_total = summary.documents_inserted,
                "Inserted batch"
            );
        }

        Ok(summary)
    }

    /// Execute the full load
    ///
    /// `prepare` → connect-with-retry → `load_into` → close. The MongoDB
    /// client is released on every exit path: explicitly shut down after a
    /// successful load, dropped when any step fails.
    pub async fn execute(&self) -> Result<LoadSummary> {
        let start_time = Instant::now();

        let batches = self.prepare()?;

        let policy = RetryPolicy::from_config(&self.config.mongodb.retry);
        let store = Box::new(MongoStore::connect(&self.config.mongodb, &policy).await?);

        match self.load_into(store.as_ref(), &batches).await {
            Ok(summary) => {
                store.close().await;

                let summary = summary.with_duration(start_time.elapsed());
                summary.log_summary();
                Ok(summary)
            }
            // The store drops here, releasing the connection
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoadConfig, SourceConfig};
    use crate::domain::{CohortError, StorageError};
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    /// In-memory sink recording the protocol calls it receives
    #[derive(Default)]
    struct FakeSink {
        existing: u64,
        calls: Mutex<Vec<String>>,
        inserted_batches: Mutex<Vec<usize>>,
        fail_on_batch: Option<usize>,
    }

    #[async_trait]
    impl DocumentSink for FakeSink {
        async fn clear(&self) -> Result<u64> {
            self.calls.lock().unwrap().push("clear".to_string());
            Ok(self.existing)
        }

        async fn insert_batch(&self, batch: usize, records: &[Record]) -> Result<usize> {
            if self.fail_on_batch == Some(batch) {
                return Err(StorageError::InsertFailed {
                    batch,
                    message: "simulated write failure".to_string(),
                }
                .into());
            }
            self.calls.lock().unwrap().push(format!("insert {batch}"));
            self.inserted_batches.lock().unwrap().push(records.len());
            Ok(records.len())
        }

        async fn document_count(&self) -> Result<u64> {
            Ok(self.inserted_batches.lock().unwrap().iter().sum::<usize>() as u64)
        }

        async fn close(self: Box<Self>) {}
    }

    fn coordinator_with(source: SourceConfig, batch_size: usize) -> LoadCoordinator {
        let mut config = CohortConfig::default();
        config.source = source;
        config.load = LoadConfig { batch_size };
        LoadCoordinator::new(config)
    }

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn source_for(file: &NamedTempFile) -> SourceConfig {
        SourceConfig {
            path: file.path().to_string_lossy().into_owned(),
            ..SourceConfig::default()
        }
    }

    fn records(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record::from_pairs([("id", Some(i.to_string()))]))
            .collect()
    }

    #[test]
    fn test_prepare_reads_validates_and_partitions() {
        let file = csv_file(
            "Name,Age,Gender\n  Alice ,34,F\nBob,41,M\nCarol,29,F\nDan,55,M\nEve,61,F\n",
        );
        let coordinator = coordinator_with(source_for(&file), 2);

        let batches = coordinator.prepare().unwrap();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[2].len(), 1);
        // Formatting ran before partitioning
        assert_eq!(batches[0][0].value("Name"), Some("Alice"));
    }

    #[test]
    fn test_prepare_fails_on_missing_required_column() {
        let file = csv_file("Name,Age\nAlice,34\n");
        let coordinator = coordinator_with(source_for(&file), 100);

        let result = coordinator.prepare();

        assert!(matches!(result, Err(CohortError::Schema { .. })));
    }

    #[test]
    fn test_prepare_fails_on_empty_dataset() {
        let file = csv_file("Name,Age,Gender\n");
        let coordinator = coordinator_with(source_for(&file), 100);

        let result = coordinator.prepare();

        assert!(matches!(result, Err(CohortError::EmptyDataset)));
    }

    #[tokio::test]
    async fn test_load_into_clears_before_inserting() {
        let file = csv_file("Name,Age,Gender\nAlice,34,F\n");
        let coordinator = coordinator_with(source_for(&file), 100);
        let sink = FakeSink {
            existing: 7,
            ..FakeSink::default()
        };

        let batches = vec![records(2), records(1)];
        let summary = coordinator.load_into(&sink, &batches).await.unwrap();

        assert_eq!(
            *sink.calls.lock().unwrap(),
            vec!["clear", "insert 0", "insert 1"]
        );
        assert_eq!(summary.documents_cleared, 7);
        assert_eq!(summary.documents_inserted, 3);
        assert_eq!(summary.rows_read, 3);
        assert_eq!(summary.batch_count, 2);
        assert!(summary.is_complete());
    }

    #[tokio::test]
    async fn test_load_into_insert_failure_keeps_prior_batches() {
        let file = csv_file("Name,Age,Gender\nAlice,34,F\n");
        let coordinator = coordinator_with(source_for(&file), 100);
        let sink = FakeSink {
            fail_on_batch: Some(1),
            ..FakeSink::default()
        };

        let batches = vec![records(2), records(2), records(1)];
        let result = coordinator.load_into(&sink, &batches).await;

        match result {
            Err(CohortError::Storage(StorageError::InsertFailed { batch, .. })) => {
                assert_eq!(batch, 1);
            }
            other => panic!("Expected InsertFailed, got {other:?}"),
        }

        // Batch 0 stays inserted; nothing after the failure ran
        assert_eq!(*sink.inserted_batches.lock().unwrap(), vec![2]);
        assert_eq!(sink.document_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_load_into_empty_batches_clears_only() {
        let file = csv_file("Name,Age,Gender\nAlice,34,F\n");
        let coordinator = coordinator_with(source_for(&file), 100);
        let sink = FakeSink {
            existing: 3,
            ..FakeSink::default()
        };

        let summary = coordinator.load_into(&sink, &[]).await.unwrap();

        assert_eq!(*sink.calls.lock().unwrap(), vec!["clear"]);
        assert_eq!(summary.documents_cleared, 3);
        assert_eq!(summary.documents_inserted, 0);
    }
}
