//! MongoDB store implementation
//!
//! This module provides the concrete [`DocumentSink`] backed by the
//! official MongoDB driver: connect-with-retry, clear, batch insert,
//! count and shutdown against a single target collection.

use crate::adapters::mongodb::retry::{connect_with_retry, ProbeFailure, RetryPolicy};
use crate::adapters::storage::DocumentSink;
use crate::config::MongoDbConfig;
use crate::domain::{Record, Result, StorageError};
use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::ErrorKind;
use mongodb::options::{ClientOptions, Credential, ServerAddress};
use mongodb::{Client, Collection};
use std::time::Duration;

/// MongoDB-backed document store for Cohort
///
/// Holds the client and a handle to the single target collection. The
/// store is a single-owner resource: close it explicitly on success, or
/// let the drop path release the connection on error.
pub struct MongoStore {
    client: Client,
    collection: Collection<Document>,
    database_name: String,
    collection_name: String,
}

impl MongoStore {
    /// Connect to MongoDB, probing with a ping until the server answers
    ///
    /// Each attempt issues a `ping` command bounded by the configured
    /// server-selection timeout. Transient failures (server selection, IO)
    /// wait the policy delay and retry; anything else aborts immediately.
    ///
    /// # Errors
    ///
    /// - [`StorageError::ConnectionTimeout`] once attempts are exhausted
    /// - [`StorageError::AuthenticationFailed`] for credential problems
    /// - [`StorageError::ConnectionFailed`] for invalid client options
    pub async fn connect(config: &MongoDbConfig, policy: &RetryPolicy) -> Result<Self> {
        let client = build_client(config)?;
        let database = client.database(&config.database);

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            max_attempts = policy.max_attempts,
            "Connecting to MongoDB"
        );

        let attempt = connect_with_retry(policy, |attempt| {
            let database = database.clone();
            async move {
                tracing::debug!(attempt, "Pinging MongoDB");
                match database.run_command(doc! { "ping": 1 }).await {
                    Ok(_) => Ok(()),
                    Err(error) if is_transient(&error) => {
                        Err(ProbeFailure::Transient(error.to_string()))
                    }
                    Err(error) => Err(ProbeFailure::Fatal(classify_fatal(&error))),
                }
            }
        })
        .await?;

        tracing::info!(attempt, "Connected to MongoDB");

        let collection = database.collection::<Document>(&config.collection);

        Ok(Self {
            client,
            collection,
            database_name: config.database.clone(),
            collection_name: config.collection.clone(),
        })
    }

    /// Name of the target database
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Name of the target collection
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }
}

#[async_trait]
impl DocumentSink for MongoStore {
    async fn clear(&self) -> Result<u64> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(|e| StorageError::ClearFailed(e.to_string()))?;

        tracing::info!(
            deleted = result.deleted_count,
            collection = %self.collection_name,
            "Cleared target collection"
        );

        Ok(result.deleted_count)
    }

    async fn insert_batch(&self, batch: usize, records: &[Record]) -> Result<usize> {
        let documents: Vec<Document> = records.iter().map(record_to_document).collect();

        let result = self
            .collection
            .insert_many(documents)
            .await
            .map_err(|e| StorageError::InsertFailed {
                batch,
                message: e.to_string(),
            })?;

        Ok(result.inserted_ids.len())
    }

    async fn document_count(&self) -> Result<u64> {
        let count = self
            .collection
            .count_documents(doc! {})
            .await
            .map_err(|e| StorageError::CountFailed(e.to_string()))?;

        Ok(count)
    }

    async fn close(self: Box<Self>) {
        tracing::debug!("Shutting down MongoDB client");
        let this = *self;
        this.client.shutdown().await;
    }
}

/// Build client options from the configuration
///
/// The client itself performs no IO until the first operation, so this
/// cannot hang; failures here mean invalid options.
fn build_client(config: &MongoDbConfig) -> Result<Client> {
    use secrecy::ExposeSecret;

    let mut options = ClientOptions::builder()
        .hosts(vec![ServerAddress::Tcp {
            host: config.host.clone(),
            port: Some(config.port),
        }])
        .app_name("cohort".to_string())
        .server_selection_timeout(Duration::from_millis(config.server_selection_timeout_ms))
        .build();

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.expose_secret().to_string())
                .source(config.auth_source.clone())
                .build(),
        );
    }

    let client = Client::with_options(options)
        .map_err(|e| StorageError::ConnectionFailed(format!("Invalid client options: {e}")))?;

    Ok(client)
}

/// Whether a driver error is worth retrying
///
/// Only the "server not there yet" class retries: selection timeouts and
/// raw IO failures. Everything else aborts the connect loop.
fn is_transient(error: &mongodb::error::Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_)
    )
}

fn classify_fatal(error: &mongodb::error::Error) -> StorageError {
    match *error.kind {
        ErrorKind::Authentication { ref message, .. } => {
            StorageError::AuthenticationFailed(message.clone())
        }
        _ => StorageError::ConnectionFailed(error.to_string()),
    }
}

/// Convert a record to a BSON document
///
/// String values map to `Bson::String`, nulls to `Bson::Null`; column
/// order is preserved. No type coercion: ages and dates stay text, as
/// they appear in the CSV.
fn record_to_document(record: &Record) -> Document {
    let mut document = Document::new();

    for (column, value) in record.iter() {
        let bson = match value {
            Some(v) => Bson::String(v.to_string()),
            None => Bson::Null,
        };
        document.insert(column, bson);
    }

    document
}
