//! Storage layer for case-tracker
//!
//! A single `cases` table in SQLite, accessed through sqlx.

pub mod error;
mod migrations;
mod sqlite;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::run_migrations;
pub use sqlite::SqliteStorage;
pub use traits::CaseStore;
