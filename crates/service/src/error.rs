//! Typed error enum for the service layer.
//!
//! Unifies storage and extraction failures so handlers can map each failure
//! mode to a status code without downcasting.

use case_tracker_llm::LlmError;
use case_tracker_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Model call failed or its reply could not be used.
    #[error("{0}")]
    Extraction(#[from] LlmError),

    /// Referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
}
