//! Storage trait definitions.
//!
//! These traits define the interface for storage backends, enabling swapping
//! between different implementations without changing business logic.

use async_trait::async_trait;

use crate::domain::{Feedback, NewFeedback};
use crate::error::StorageResult;

/// Feedback persistence.
///
/// Implementations must enforce the field constraints themselves so that no
/// code path can store an invalid record, even one that skipped validation.
#[async_trait]
pub trait FeedbackStorage: Send + Sync {
    /// Create the backing table if absent.
    ///
    /// This is idempotent and safe to call on every startup. Example records
    /// are seeded only by the call that actually creates the table.
    async fn initialize(&self) -> StorageResult<()>;

    /// Insert a new record, assigning its `id` and `submitted_at`.
    ///
    /// Fails with [`StorageError::Constraint`](crate::error::StorageError::Constraint)
    /// if a field violates its limit.
    async fn create(&self, feedback: &NewFeedback) -> StorageResult<Feedback>;

    /// All records, most recently submitted first.
    async fn list_all(&self) -> StorageResult<Vec<Feedback>>;

    /// Fetch a record by id.
    async fn get_by_id(&self, id: i64) -> StorageResult<Option<Feedback>>;

    /// Delete a record by id, returning the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> StorageResult<u64>;

    /// Number of stored records.
    async fn count(&self) -> StorageResult<u64>;

    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}
