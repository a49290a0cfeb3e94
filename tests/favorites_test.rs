use std::collections::HashSet;

use slug_courses::db::{self, repository};
use slug_courses::services::toggle_favorite;

#[tokio::test]
async fn test_insert_select_delete() {
    let pool = db::connect_in_memory().await.expect("Failed to create database");

    assert!(repository::select(&pool, "2244_10001").await.unwrap().is_none());

    repository::insert(&pool, "2244_10001").await.expect("Failed to insert");
    repository::insert(&pool, "2244_10002").await.expect("Failed to insert");

    assert_eq!(
        repository::select(&pool, "2244_10001").await.unwrap().as_deref(),
        Some("2244_10001")
    );

    let all = repository::select_all(&pool).await.unwrap();
    let expected: HashSet<String> = ["2244_10001", "2244_10002"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(all, expected);

    assert!(repository::delete(&pool, "2244_10001").await.unwrap());
    assert!(!repository::delete(&pool, "2244_10001").await.unwrap());
    assert_eq!(repository::select_all(&pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_insert_is_rejected() {
    let pool = db::connect_in_memory().await.expect("Failed to create database");

    repository::insert(&pool, "2244_1").await.unwrap();
    assert!(repository::insert(&pool, "2244_1").await.is_err());
}

#[tokio::test]
async fn test_favorites_rows_carry_timestamps() {
    let pool = db::connect_in_memory().await.expect("Failed to create database");

    repository::insert(&pool, "2244_1").await.unwrap();
    let rows = repository::fetch_favorites(&pool).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "2244_1");
    assert!(chrono::DateTime::parse_from_rfc3339(&rows[0].created_at).is_ok());
}

#[tokio::test]
async fn test_toggle_twice_restores_membership() {
    let pool = db::connect_in_memory().await.expect("Failed to create database");
    repository::insert(&pool, "2242_500").await.unwrap();
    let before = repository::select_all(&pool).await.unwrap();

    for id in ["2244_1", "2242_500"] {
        let first = repository::toggle(&pool, id).await.unwrap();
        let second = repository::toggle(&pool, id).await.unwrap();
        assert_ne!(first, second, "toggle should flip membership for {id}");
        assert_eq!(repository::select_all(&pool).await.unwrap(), before);
    }
}

#[tokio::test]
async fn test_toggle_favorite_messages() {
    let pool = db::connect_in_memory().await.expect("Failed to create database");

    let on = toggle_favorite(&pool, "2244_1", "Algorithms").await.unwrap();
    assert!(on.favorited);
    assert_eq!(on.message, "Favorited Algorithms");

    let off = toggle_favorite(&pool, "2244_1", "Algorithms").await.unwrap();
    assert!(!off.favorited);
    assert_eq!(off.message, "Unfavorited Algorithms");

    // falls back to the id when no name is known
    let unnamed = toggle_favorite(&pool, "2244_2", "").await.unwrap();
    assert_eq!(unnamed.message, "Favorited 2244_2");
}

#[tokio::test]
async fn test_toggle_rejects_blank_id() {
    let pool = db::connect_in_memory().await.expect("Failed to create database");

    assert!(toggle_favorite(&pool, "  ", "x").await.is_err());
    assert!(repository::select_all(&pool).await.unwrap().is_empty());
}
