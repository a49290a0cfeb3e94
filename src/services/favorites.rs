use std::collections::HashSet;

use sqlx::SqlitePool;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{AnnotatedCourse, Course, FavoriteToggle};

/// Pairs each course with its membership in `favorites`, keeping order.
pub fn annotate(courses: &[Course], favorites: &HashSet<String>) -> Vec<AnnotatedCourse> {
    courses
        .iter()
        .map(|course| AnnotatedCourse {
            is_favorited: favorites.contains(&course.id),
            course: course.clone(),
        })
        .collect()
}

pub async fn toggle_favorite(
    db: &SqlitePool,
    id: &str,
    short_name: &str,
) -> Result<FavoriteToggle, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("course id must not be empty".to_string()));
    }

    let favorited = repository::toggle(db, id).await?;
    let label = if short_name.is_empty() { id } else { short_name };
    let message = if favorited {
        format!("Favorited {}", label)
    } else {
        format!("Unfavorited {}", label)
    };
    info!("{} ({})", message, id);

    Ok(FavoriteToggle {
        id: id.to_string(),
        favorited,
        message,
    })
}
