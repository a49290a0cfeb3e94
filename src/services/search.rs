use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::repository;
use crate::error::AppError;
use crate::models::AnnotatedCourse;
use crate::query::SearchRequest;
use crate::remote::CourseSource;

use super::favorites::annotate;

pub async fn search_courses(
    db: &SqlitePool,
    courses: &Arc<dyn CourseSource>,
    request: &SearchRequest,
) -> Result<Vec<AnnotatedCourse>, AppError> {
    let filter = request.to_filter();
    let results = courses.search(&filter).await?;
    let favorites = repository::select_all(db).await?;
    Ok(annotate(&results, &favorites))
}

/// Remote records for every locally favorited id.
pub async fn favorite_courses(
    db: &SqlitePool,
    courses: &Arc<dyn CourseSource>,
) -> Result<Vec<AnnotatedCourse>, AppError> {
    let favorites = repository::select_all(db).await?;
    let mut ids: Vec<String> = favorites.iter().cloned().collect();
    ids.sort();
    let results = courses.fetch_by_ids(&ids).await?;
    Ok(annotate(&results, &favorites))
}
