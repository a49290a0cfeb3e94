use std::collections::HashSet;
use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{AnnotatedCourse, Course, FavoriteToggle};
use crate::remote::CourseSource;
use crate::services::{FetchTarget, annotate, toggle_favorite};

use super::scope::ScreenScope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesUiState {
    pub favorites_list: Vec<Course>,
    pub favorite_ids: HashSet<String>,
    pub data_loaded: bool,
    pub error_message: String,
    pub favorite_message: String,
    pub refreshing: bool,
}

impl FavoritesUiState {
    /// Unfavorited courses stay listed until the next load so they can be
    /// re-starred.
    pub fn annotated(&self) -> Vec<AnnotatedCourse> {
        annotate(&self.favorites_list, &self.favorite_ids)
    }
}

pub struct FavoritesModel {
    db: SqlitePool,
    courses: Arc<dyn CourseSource>,
    state: Arc<watch::Sender<FavoritesUiState>>,
    scope: ScreenScope,
}

impl FavoritesModel {
    pub fn new(db: SqlitePool, courses: Arc<dyn CourseSource>) -> Self {
        let (state, _) = watch::channel(FavoritesUiState::default());
        Self {
            db,
            courses,
            state: Arc::new(state),
            scope: ScreenScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FavoritesUiState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FavoritesUiState {
        self.state.borrow().clone()
    }

    pub fn set_refresh(&self, refreshing: bool) {
        self.state.send_modify(|s| s.refreshing = refreshing);
    }

    pub fn get_favorites(&self) {
        let db = self.db.clone();
        let courses = self.courses.clone();
        let state = self.state.clone();

        self.scope.spawn(async move {
            match load_favorites(&db, &courses).await {
                Ok((ids, list)) => {
                    debug!("favorites screen loaded {} of {} ids", list.len(), ids.len());
                    state.send_modify(|s| {
                        s.favorites_list = list;
                        s.favorite_ids = ids;
                        s.data_loaded = true;
                        s.refreshing = false;
                    });
                }
                Err(e) => {
                    warn!("favorites failed: {}", e);
                    let message = FetchTarget::Favorites.message(&e);
                    state.send_modify(|s| s.error_message = message);
                }
            }
        });
    }

    pub async fn handle_favorite(&self, course: &Course) -> Result<FavoriteToggle, AppError> {
        let outcome = toggle_favorite(&self.db, &course.id, &course.short_name).await?;
        let ids = repository::select_all(&self.db).await?;
        self.state.send_modify(|s| {
            s.favorite_message = outcome.message.clone();
            s.favorite_ids = ids;
        });
        Ok(outcome)
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error_message.clear());
    }
}

async fn load_favorites(
    db: &SqlitePool,
    courses: &Arc<dyn CourseSource>,
) -> Result<(HashSet<String>, Vec<Course>), AppError> {
    let ids = repository::select_all(db).await?;
    let mut sorted: Vec<String> = ids.iter().cloned().collect();
    sorted.sort();
    let list = courses.fetch_by_ids(&sorted).await?;
    Ok((ids, list))
}
