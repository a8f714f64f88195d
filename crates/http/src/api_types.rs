//! Request and response types.

use case_tracker_core::DEFAULT_LIST_LIMIT;
use serde::{Deserialize, Serialize};

const fn default_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
