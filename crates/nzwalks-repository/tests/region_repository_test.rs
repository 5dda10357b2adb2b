//! Integration tests for MySqlRegionRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::{region_draft, TestDatabase};
use nzwalks_core::RegionId;
use nzwalks_repository::{DatabasePoolInterface, MySqlRegionRepository, RegionRepository};

#[tokio::test]
async fn test_health_check() {
    let db = TestDatabase::new().await;
    db.pool().health_check().await.expect("Health check failed");
}

#[tokio::test]
async fn test_create_and_get_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    let created = repo
        .create(&region_draft("RG1", "Region1"))
        .await
        .expect("Failed to create region");
    assert_eq!(created.code, "RG1");
    assert_eq!(created.name, "Region1");

    let found = repo
        .get_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("Region not found");
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_get_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    let result = repo.get_by_id(RegionId::new()).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_all_ordered_by_name() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    assert!(repo.get_all().await.expect("Query failed").is_empty());

    repo.create(&region_draft("WGN", "Wellington")).await.unwrap();
    repo.create(&region_draft("AKL", "Auckland")).await.unwrap();

    let names: Vec<String> = repo
        .get_all()
        .await
        .expect("Query failed")
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Auckland", "Wellington"]);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    let created = repo.create(&region_draft("NSN", "Nelson")).await.unwrap();
    let mut draft = region_draft("NTL", "Northland");
    draft.region_image_url = None;

    let updated = repo
        .update(created.id, &draft)
        .await
        .expect("Update failed")
        .expect("Region not found");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.to_draft(), draft);
}

#[tokio::test]
async fn test_update_with_same_values_still_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    let created = repo.create(&region_draft("NSN", "Nelson")).await.unwrap();
    let updated = repo.update(created.id, &created.to_draft()).await.unwrap();

    assert_eq!(updated, Some(created));
}

#[tokio::test]
async fn test_update_missing_region() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    repo.create(&region_draft("WGN", "Wellington")).await.unwrap();

    let result = repo
        .update(RegionId::new(), &region_draft("X", "Nowhere"))
        .await
        .expect("Update failed");
    assert!(result.is_none());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_returns_previous_row() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    let created = repo.create(&region_draft("STL", "Southland")).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 1);

    let deleted = repo.delete(created.id).await.expect("Delete failed");
    assert_eq!(deleted, Some(created.clone()));
    assert_eq!(repo.count().await.unwrap(), 0);
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_region() {
    let db = TestDatabase::new().await;
    let repo = MySqlRegionRepository::new(db.pool());

    assert!(repo.delete(RegionId::new()).await.expect("Delete failed").is_none());
}
