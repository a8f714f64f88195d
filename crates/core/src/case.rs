use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{STATUS_COMPLETE, STATUS_PENDING};

/// Lifecycle state of a case. Only moves forward: `Pending` to `Complete`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStatus {
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "complete")]
    Complete,
}

impl CaseStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Complete => STATUS_COMPLETE,
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CaseStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_COMPLETE => Ok(Self::Complete),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

#[derive(Debug, Error)]
#[error("invalid case status: {0}")]
pub struct ParseStatusError(pub String);

/// A tracked case record as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Case {
    pub id: i64,
    /// Seven digits by convention; not enforced.
    pub case_no: String,
    pub category: String,
    pub source: Option<String>,
    /// Set once at creation.
    pub create_date: DateTime<Utc>,
    pub status: CaseStatus,
}

/// Input for creating a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCase {
    pub case_no: String,
    pub category: String,
    #[serde(default)]
    pub source: Option<String>,
}

impl NewCase {
    #[must_use]
    pub fn new(case_no: impl Into<String>, category: impl Into<String>) -> Self {
        Self { case_no: case_no.into(), category: category.into(), source: None }
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
