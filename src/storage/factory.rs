//! Storage backend factory.
//!
//! Creates the appropriate storage backend based on configuration.

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppError;
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::FeedbackStorage;

/// Create and initialize a storage backend based on configuration.
///
/// The returned handle is ready for use: the table exists and, on first
/// creation, the example records are in place.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be opened or initialized.
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn FeedbackStorage>, AppError> {
    let storage = match config.backend {
        StorageBackend::Sqlite => SqliteStorage::open(&config.sqlite, config.seed_examples).await?,
        StorageBackend::Memory => SqliteStorage::in_memory(config.seed_examples).await?,
    };

    storage.initialize().await?;
    storage.health_check().await?;

    Ok(Arc::new(storage))
}
