use std::sync::Arc;

use sqlx::SqlitePool;

use crate::remote::CourseSource;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub courses: Arc<dyn CourseSource>,
}
