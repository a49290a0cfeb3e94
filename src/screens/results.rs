use std::collections::HashSet;
use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{AnnotatedCourse, Course, FavoriteToggle};
use crate::query::SearchRequest;
use crate::remote::CourseSource;
use crate::services::{FetchTarget, annotate, toggle_favorite};

use super::scope::ScreenScope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsUiState {
    pub results_list: Vec<Course>,
    pub favorites: HashSet<String>,
    pub data_loaded: bool,
    pub favorite_message: String,
    pub error_message: String,
    pub refreshing: bool,
}

impl ResultsUiState {
    pub fn annotated(&self) -> Vec<AnnotatedCourse> {
        annotate(&self.results_list, &self.favorites)
    }
}

/// Search results for one query.
pub struct ResultsModel {
    db: SqlitePool,
    courses: Arc<dyn CourseSource>,
    state: Arc<watch::Sender<ResultsUiState>>,
    scope: ScreenScope,
}

impl ResultsModel {
    pub fn new(db: SqlitePool, courses: Arc<dyn CourseSource>) -> Self {
        let (state, _) = watch::channel(ResultsUiState::default());
        Self {
            db,
            courses,
            state: Arc::new(state),
            scope: ScreenScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ResultsUiState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ResultsUiState {
        self.state.borrow().clone()
    }

    pub fn set_refresh(&self, refreshing: bool) {
        self.state.send_modify(|s| s.refreshing = refreshing);
    }

    /// Starts a search. A later call does not cancel an earlier one; whichever
    /// finishes last owns `results_list`.
    pub fn get_courses(&self, request: SearchRequest) {
        let filter = request.to_filter();
        let courses = self.courses.clone();
        let state = self.state.clone();

        self.scope.spawn(async move {
            match courses.search(&filter).await {
                Ok(results) => {
                    debug!("results screen loaded {} courses", results.len());
                    state.send_modify(|s| {
                        s.results_list = results;
                        s.data_loaded = true;
                    });
                }
                Err(e) => {
                    warn!("search failed: {}", e);
                    let message = FetchTarget::Results.message(&e);
                    state.send_modify(|s| s.error_message = message);
                }
            }
            state.send_modify(|s| s.refreshing = false);
        });
    }

    pub fn get_favorites(&self) {
        let db = self.db.clone();
        let state = self.state.clone();

        self.scope.spawn(async move {
            match repository::select_all(&db).await {
                Ok(favorites) => state.send_modify(|s| s.favorites = favorites),
                Err(e) => warn!("failed to read favorites: {}", e),
            }
        });
    }

    pub async fn handle_favorite(&self, course: &Course) -> Result<FavoriteToggle, AppError> {
        let outcome = toggle_favorite(&self.db, &course.id, &course.short_name).await?;
        let favorites = repository::select_all(&self.db).await?;
        self.state.send_modify(|s| {
            s.favorite_message = outcome.message.clone();
            s.favorites = favorites;
        });
        Ok(outcome)
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error_message.clear());
    }
}
