use case_tracker_core::{CaseStatus, NewCase};
use chrono::Utc;
use tempfile::TempDir;

use crate::{CaseStore, SqliteStorage};

async fn create_test_storage() -> SqliteStorage {
    SqliteStorage::in_memory().await.unwrap()
}

#[tokio::test]
async fn create_case_assigns_id_and_pending_status() {
    let storage = create_test_storage().await;
    let before = Utc::now();

    let case = storage
        .create_case(&NewCase::new("1234567", "theft").source("Jane"))
        .await
        .unwrap();

    assert!(case.id > 0);
    assert_eq!(case.case_no, "1234567");
    assert_eq!(case.category, "theft");
    assert_eq!(case.source.as_deref(), Some("Jane"));
    assert_eq!(case.status, CaseStatus::Pending);
    assert!(case.create_date >= before);
    assert!(case.create_date <= Utc::now());
}

#[tokio::test]
async fn create_case_without_source_stores_null() {
    let storage = create_test_storage().await;
    let case = storage.create_case(&NewCase::new("7654321", "fraud")).await.unwrap();
    let fetched = storage.get_case(case.id).await.unwrap().unwrap();
    assert!(fetched.source.is_none());
    assert_eq!(fetched, case);
}

#[tokio::test]
async fn duplicate_case_numbers_are_allowed() {
    let storage = create_test_storage().await;
    let first = storage.create_case(&NewCase::new("1111111", "theft")).await.unwrap();
    let second = storage.create_case(&NewCase::new("1111111", "theft")).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn list_cases_pages_in_insertion_order() {
    let storage = create_test_storage().await;
    for no in ["1000001", "1000002", "1000003"] {
        storage.create_case(&NewCase::new(no, "theft")).await.unwrap();
    }

    let page = storage.list_cases(0, 2).await.unwrap();
    let numbers: Vec<&str> = page.iter().map(|c| c.case_no.as_str()).collect();
    assert_eq!(numbers, ["1000001", "1000002"]);

    let rest = storage.list_cases(2, 100).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].case_no, "1000003");
}

#[tokio::test]
async fn list_cases_out_of_range_is_empty() {
    let storage = create_test_storage().await;
    storage.create_case(&NewCase::new("1000001", "theft")).await.unwrap();

    assert!(storage.list_cases(10, 5).await.unwrap().is_empty());
    assert!(storage.list_cases(0, 0).await.unwrap().is_empty());
    assert!(storage.list_cases(usize::MAX, usize::MAX).await.unwrap().is_empty());
}

#[tokio::test]
async fn mark_case_complete_missing_id_returns_none() {
    let storage = create_test_storage().await;
    assert!(storage.mark_case_complete(424_242).await.unwrap().is_none());
}

#[tokio::test]
async fn mark_case_complete_changes_only_status() {
    let storage = create_test_storage().await;
    let created = storage
        .create_case(&NewCase::new("2345678", "burglary").source("John Doe"))
        .await
        .unwrap();

    let updated = storage.mark_case_complete(created.id).await.unwrap().unwrap();

    assert_eq!(updated.status, CaseStatus::Complete);
    assert_eq!(updated.status.as_str(), "complete");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.case_no, created.case_no);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.source, created.source);
    assert_eq!(updated.create_date, created.create_date);
}

#[tokio::test]
async fn mark_case_complete_twice_stays_complete() {
    let storage = create_test_storage().await;
    let created = storage.create_case(&NewCase::new("3456789", "theft")).await.unwrap();
    storage.mark_case_complete(created.id).await.unwrap();
    let again = storage.mark_case_complete(created.id).await.unwrap().unwrap();
    assert_eq!(again.status, CaseStatus::Complete);
}

#[tokio::test]
async fn file_database_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("cases.db").display());

    let storage = SqliteStorage::new(&url).await.unwrap();
    let created = storage.create_case(&NewCase::new("5555555", "theft")).await.unwrap();
    storage.close().await;

    let reopened = SqliteStorage::new(&url).await.unwrap();
    let fetched = reopened.get_case(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    reopened.close().await;
}

#[tokio::test]
async fn corrupt_status_is_reported() {
    let storage = create_test_storage().await;
    let created = storage.create_case(&NewCase::new("6666666", "theft")).await.unwrap();
    sqlx::query("UPDATE cases SET status = 'archived' WHERE id = ?1")
        .bind(created.id)
        .execute(&storage.pool)
        .await
        .unwrap();

    let err = storage.get_case(created.id).await.unwrap_err();
    assert!(matches!(err, crate::StorageError::DataCorruption { .. }));
}
