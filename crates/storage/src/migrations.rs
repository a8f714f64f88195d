//! Schema setup for the case store.

use sqlx::SqlitePool;

use crate::error::StorageError;

/// Create the `cases` table and its indexes if they do not exist yet.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cases (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            case_no TEXT NOT NULL,
            category TEXT NOT NULL,
            source TEXT,
            create_date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Pending'
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create table cases: {e}")))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_cases_case_no ON cases (case_no)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(format!("create index idx_cases_case_no: {e}")))?;

    tracing::debug!("case schema ready");
    Ok(())
}
