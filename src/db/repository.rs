use std::collections::HashSet;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::Favorite;

pub async fn select_all(db: &SqlitePool) -> Result<HashSet<String>, sqlx::Error> {
    let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM favorites")
        .fetch_all(db)
        .await?;
    Ok(ids.into_iter().collect())
}

pub async fn fetch_favorites(db: &SqlitePool) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>(
        "SELECT id, created_at FROM favorites ORDER BY created_at DESC, id ASC"
    )
    .fetch_all(db)
    .await
}

pub async fn select(db: &SqlitePool, id: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM favorites WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn insert(db: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    sqlx::query("INSERT INTO favorites (id, created_at) VALUES (?, ?)")
        .bind(id)
        .bind(now)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete(db: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM favorites WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

/// Flips membership of `id` and returns whether it is now a favorite.
pub async fn toggle(db: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = db.begin().await?;

    let existing: Option<String> = sqlx::query_scalar("SELECT id FROM favorites WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    let favorited = match existing {
        Some(_) => {
            sqlx::query("DELETE FROM favorites WHERE id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            false
        }
        None => {
            sqlx::query("INSERT INTO favorites (id, created_at) VALUES (?, ?)")
                .bind(id)
                .bind(Utc::now().to_rfc3339())
                .execute(&mut *tx)
                .await?;
            true
        }
    };

    tx.commit().await?;
    Ok(favorited)
}
