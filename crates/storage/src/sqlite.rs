//! SQLite storage backend using sqlx.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use case_tracker_core::{
    Case, CaseStatus, NewCase, DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_MAX_CONNECTIONS,
};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::error::StorageError;
use crate::migrations::run_migrations;
use crate::traits::CaseStore;

const CASE_COLUMNS: &str = "id, case_no, category, source, create_date, status";

/// Case store over a pooled SQLite database.
///
/// Cloning is cheap; clones share the pool. Every operation borrows a
/// connection for the duration of one statement.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens (creating if missing) the database at `database_url` and ensures the schema.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(DB_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(DB_POOL_ACQUIRE_TIMEOUT_SECS))
            .connect_with(options)
            .await?;
        run_migrations(&pool).await?;
        tracing::info!(database_url, "SqliteStorage initialized");
        Ok(Self { pool })
    }

    /// Private in-memory database. The pool holds exactly one connection that
    /// never expires, since every SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SqliteStorage closed");
    }
}

/// Convert `usize` to `i64` for SQL LIMIT/OFFSET binds.
/// Saturates to `i64::MAX` on overflow.
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn row_to_case(row: &SqliteRow) -> Result<Case, StorageError> {
    let status_str: String = row.try_get("status")?;
    let status = CaseStatus::from_str(&status_str).map_err(|e| StorageError::DataCorruption {
        context: format!("unknown status '{status_str}' in cases table"),
        source: Box::new(e),
    })?;
    let create_date: DateTime<Utc> = row.try_get("create_date")?;
    Ok(Case {
        id: row.try_get("id")?,
        case_no: row.try_get("case_no")?,
        category: row.try_get("category")?,
        source: row.try_get("source")?,
        create_date,
        status,
    })
}

#[async_trait]
impl CaseStore for SqliteStorage {
    async fn create_case(&self, new_case: &NewCase) -> Result<Case, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO cases (case_no, category, source, create_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {CASE_COLUMNS}"
        ))
        .bind(&new_case.case_no)
        .bind(&new_case.category)
        .bind(&new_case.source)
        .bind(Utc::now())
        .bind(CaseStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;
        let case = row_to_case(&row)?;
        tracing::debug!(id = case.id, case_no = %case.case_no, "case created");
        Ok(case)
    }

    async fn list_cases(&self, skip: usize, limit: usize) -> Result<Vec<Case>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {CASE_COLUMNS} FROM cases ORDER BY id LIMIT ?1 OFFSET ?2"
        ))
        .bind(usize_to_i64(limit))
        .bind(usize_to_i64(skip))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_case).collect()
    }

    async fn get_case(&self, id: i64) -> Result<Option<Case>, StorageError> {
        let row = sqlx::query(&format!("SELECT {CASE_COLUMNS} FROM cases WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_case(&r)).transpose()
    }

    async fn mark_case_complete(&self, id: i64) -> Result<Option<Case>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE cases SET status = ?1 WHERE id = ?2 RETURNING {CASE_COLUMNS}"
        ))
        .bind(CaseStatus::Complete.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        let case = row.map(|r| row_to_case(&r)).transpose()?;
        if case.is_some() {
            tracing::debug!(id, "case marked complete");
        }
        Ok(case)
    }
}
