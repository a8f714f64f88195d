use async_trait::async_trait;
use case_tracker_core::{Case, NewCase};

use crate::error::StorageError;

/// Persistence operations over case records.
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Insert a new case with status `Pending` and the current timestamp.
    /// Duplicate case numbers are allowed.
    async fn create_case(&self, new_case: &NewCase) -> Result<Case, StorageError>;

    /// Cases in insertion order, skipping `skip` and returning at most `limit`.
    async fn list_cases(&self, skip: usize, limit: usize) -> Result<Vec<Case>, StorageError>;

    /// Get case by ID.
    async fn get_case(&self, id: i64) -> Result<Option<Case>, StorageError>;

    /// Set status to `complete`. Returns `None` if no case has this ID.
    async fn mark_case_complete(&self, id: i64) -> Result<Option<Case>, StorageError>;
}
