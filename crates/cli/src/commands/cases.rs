use anyhow::Result;
use case_tracker_storage::{CaseStore, SqliteStorage};

use crate::get_database_url;

pub(crate) async fn run_list(skip: usize, limit: usize) -> Result<()> {
    let storage = SqliteStorage::new(&get_database_url()).await?;
    let cases = storage.list_cases(skip, limit).await;
    storage.close().await;
    println!("{}", serde_json::to_string_pretty(&cases?)?);
    Ok(())
}

pub(crate) async fn run_complete(id: i64) -> Result<()> {
    let storage = SqliteStorage::new(&get_database_url()).await?;
    let updated = storage.mark_case_complete(id).await;
    storage.close().await;
    match updated? {
        Some(case) => {
            println!("{}", serde_json::to_string_pretty(&case)?);
            Ok(())
        },
        None => Err(anyhow::anyhow!("Case {id} not found")),
    }
}
