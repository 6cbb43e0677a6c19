//! Repository Integration Tests
//!
//! Tests for JsonClothingRepository against a temp directory.

use crate::domain::{ClothingItem, DomainError, parse_use_date};
use crate::repository::{ClothingRepository, JsonClothingRepository, Repository, DATA_FILE_NAME};
use std::path::PathBuf;
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join(DATA_FILE_NAME)
}

async fn setup_test_repo() -> (TempDir, JsonClothingRepository) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repo = JsonClothingRepository::open(store_path(&dir)).await.expect("Failed to open repo");
    (dir, repo)
}

fn item(name: &str, cost: f64) -> ClothingItem {
    ClothingItem::new(name.to_string(), cost).unwrap()
}

#[tokio::test]
async fn test_missing_file_is_empty() {
    let (_dir, repo) = setup_test_repo().await;
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_and_list_in_order() {
    let (_dir, mut repo) = setup_test_repo().await;

    repo.create(item("Jacket", 100.0)).await.unwrap();
    repo.create(item("Hat", 15.0)).await.unwrap();

    let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Jacket", "Hat"]);
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let (_dir, mut repo) = setup_test_repo().await;

    repo.create(item("Jacket", 100.0)).await.unwrap();
    let err = repo.create(item("Jacket", 50.0)).await.unwrap_err();

    assert!(matches!(err, DomainError::Conflict(_)));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_use_appends_date() {
    let (_dir, mut repo) = setup_test_repo().await;
    repo.create(item("Jacket", 100.0)).await.unwrap();

    repo.add_use("Jacket", parse_use_date("2024-01-02").unwrap()).await.unwrap();
    let updated = repo.add_use("Jacket", parse_use_date("2024-01-01").unwrap()).await.unwrap();

    assert_eq!(updated.wear_count(), 2);
    assert_eq!(updated.uses[0], parse_use_date("2024-01-02").unwrap());
    let found = repo.find("Jacket").await.unwrap().unwrap();
    assert_eq!(found, updated);
}

#[tokio::test]
async fn test_add_use_unknown_item_is_not_found() {
    let (_dir, mut repo) = setup_test_repo().await;

    let err = repo.add_use("Ghost", parse_use_date("2024-01-01").unwrap()).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_changes_survive_reopen() {
    let (dir, mut repo) = setup_test_repo().await;
    repo.create(item("Jacket", 100.0)).await.unwrap();
    repo.add_use("Jacket", parse_use_date("2024-05-06").unwrap()).await.unwrap();
    drop(repo);

    let reopened = JsonClothingRepository::open(store_path(&dir)).await.unwrap();
    let items = reopened.list().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].uses, vec![parse_use_date("2024-05-06").unwrap()]);
}

#[tokio::test]
async fn test_store_file_is_iso_dated_json() {
    let (dir, mut repo) = setup_test_repo().await;
    repo.create(item("Jacket", 100.0)).await.unwrap();
    repo.add_use("Jacket", parse_use_date("2024-05-06").unwrap()).await.unwrap();

    let raw = std::fs::read_to_string(store_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value[0]["name"], "Jacket");
    assert_eq!(value[0]["uses"][0], "2024-05-06");
    assert!(!dir.path().join("clothing_items.json.tmp").exists());
}

#[tokio::test]
async fn test_corrupt_file_is_moved_aside() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(store_path(&dir), "{ not json").unwrap();

    let repo = JsonClothingRepository::open(store_path(&dir)).await.unwrap();

    assert!(repo.list().await.unwrap().is_empty());
    assert!(!store_path(&dir).exists());
    let backup = dir.path().join("clothing_items.json.corrupt");
    assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ not json");
}

#[tokio::test]
async fn test_non_utf8_file_is_moved_aside_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut raw = br#"[{"name":"Jacket","cost":100.0,"uses":[]}]"#.to_vec();
    raw.extend_from_slice(&[0xff, 0xfe]);
    std::fs::write(store_path(&dir), &raw).unwrap();

    let mut repo = JsonClothingRepository::open(store_path(&dir)).await.unwrap();
    repo.create(item("Hat", 5.0)).await.unwrap();

    let backup = dir.path().join("clothing_items.json.corrupt");
    assert_eq!(std::fs::read(backup).unwrap(), raw);
    let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Hat"]);
}

#[tokio::test]
async fn test_unreadable_store_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(store_path(&dir)).unwrap();

    let result = JsonClothingRepository::open(store_path(&dir)).await;

    assert!(matches!(result, Err(DomainError::Internal(_))));
    assert!(store_path(&dir).is_dir());
}

#[tokio::test]
async fn test_names_match_exactly() {
    let (_dir, mut repo) = setup_test_repo().await;
    repo.create(item("Jacket", 100.0)).await.unwrap();

    repo.create(item("jacket", 40.0)).await.unwrap();
    let err = repo.add_use("Jacket ", parse_use_date("2024-01-01").unwrap()).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
    assert_eq!(repo.find("jacket").await.unwrap().map(|i| i.cost), Some(40.0));
}
