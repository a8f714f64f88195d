use std::sync::Arc;

use case_tracker_core::{Case, MAX_LIST_LIMIT, NewCase};
use case_tracker_storage::CaseStore;

use crate::ServiceError;

pub struct CaseService {
    store: Arc<dyn CaseStore>,
}

impl CaseService {
    #[must_use]
    pub fn new(store: Arc<dyn CaseStore>) -> Self {
        Self { store }
    }

    pub async fn create_case(&self, new_case: NewCase) -> Result<Case, ServiceError> {
        let case = self.store.create_case(&new_case).await.inspect_err(|e| {
            tracing::error!(case_no = %new_case.case_no, error = %e, "failed to create case");
        })?;
        tracing::info!(id = case.id, case_no = %case.case_no, category = %case.category, "case created");
        Ok(case)
    }

    /// Lists cases; `limit` is capped at [`MAX_LIST_LIMIT`].
    pub async fn list_cases(&self, skip: usize, limit: usize) -> Result<Vec<Case>, ServiceError> {
        let limit = limit.min(MAX_LIST_LIMIT);
        Ok(self.store.list_cases(skip, limit).await?)
    }

    pub async fn mark_complete(&self, id: i64) -> Result<Case, ServiceError> {
        match self.store.mark_case_complete(id).await? {
            Some(case) => {
                tracing::info!(id, "case marked complete");
                Ok(case)
            },
            None => {
                tracing::info!(id, "mark complete: case not found");
                Err(ServiceError::NotFound { entity: "Case", id: id.to_string() })
            },
        }
    }
}
