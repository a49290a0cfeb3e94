use std::collections::HashSet;
use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{AnnotatedCourse, Course, CourseInfo, FavoriteToggle};
use crate::query::SearchRequest;
use crate::remote::CourseSource;
use crate::services::{FetchTarget, annotate, toggle_favorite};

use super::scope::ScreenScope;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPaneUiState {
    pub results_list: Vec<Course>,
    pub favorites: HashSet<String>,
    pub list_data_loaded: bool,
    pub favorite_message: String,
    pub list_refreshing: bool,
}

impl ListPaneUiState {
    pub fn annotated(&self) -> Vec<AnnotatedCourse> {
        annotate(&self.results_list, &self.favorites)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPaneUiState {
    pub course_info: CourseInfo,
    pub detail_data_loaded: bool,
    pub detail_refreshing: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwoPaneResultsUiState {
    pub list_pane: ListPaneUiState,
    pub detail_pane: DetailPaneUiState,
    pub error_message: String,
}

/// Results list with a detail pane for the selected section, for wide layouts.
pub struct TwoPaneResultsModel {
    db: SqlitePool,
    courses: Arc<dyn CourseSource>,
    state: Arc<watch::Sender<TwoPaneResultsUiState>>,
    scope: ScreenScope,
}

impl TwoPaneResultsModel {
    pub fn new(db: SqlitePool, courses: Arc<dyn CourseSource>) -> Self {
        let (state, _) = watch::channel(TwoPaneResultsUiState::default());
        Self {
            db,
            courses,
            state: Arc::new(state),
            scope: ScreenScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<TwoPaneResultsUiState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> TwoPaneResultsUiState {
        self.state.borrow().clone()
    }

    pub fn set_list_refresh(&self, refreshing: bool) {
        self.state.send_modify(|s| s.list_pane.list_refreshing = refreshing);
    }

    pub fn get_courses(&self, request: SearchRequest) {
        let filter = request.to_filter();
        let courses = self.courses.clone();
        let state = self.state.clone();

        self.scope.spawn(async move {
            match courses.search(&filter).await {
                Ok(results) => {
                    debug!("list pane loaded {} courses", results.len());
                    state.send_modify(|s| {
                        s.list_pane.results_list = results;
                        s.list_pane.list_data_loaded = true;
                    });
                }
                Err(e) => {
                    warn!("search failed: {}", e);
                    let message = FetchTarget::Results.message(&e);
                    state.send_modify(|s| s.error_message = message);
                }
            }
            state.send_modify(|s| s.list_pane.list_refreshing = false);
        });
    }

    pub fn get_favorites(&self) {
        let db = self.db.clone();
        let state = self.state.clone();

        self.scope.spawn(async move {
            match repository::select_all(&db).await {
                Ok(favorites) => state.send_modify(|s| s.list_pane.favorites = favorites),
                Err(e) => warn!("failed to read favorites: {}", e),
            }
        });
    }

    pub async fn handle_favorite(&self, course: &Course) -> Result<FavoriteToggle, AppError> {
        let outcome = toggle_favorite(&self.db, &course.id, &course.short_name).await?;
        let favorites = repository::select_all(&self.db).await?;
        self.state.send_modify(|s| {
            s.list_pane.favorite_message = outcome.message.clone();
            s.list_pane.favorites = favorites;
        });
        Ok(outcome)
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error_message.clear());
    }

    /// Loads the detail pane for one section. `detail_refreshing` stays set
    /// until the request settles.
    pub fn get_course_info(&self, term: i32, class_number: &str) {
        let courses = self.courses.clone();
        let state = self.state.clone();
        let class_number = class_number.to_string();

        state.send_modify(|s| s.detail_pane.detail_refreshing = true);
        self.scope.spawn(async move {
            debug!("getting course info for {} {}", term, class_number);
            match courses.course_info(term, &class_number).await {
                Ok(info) => state.send_modify(|s| {
                    s.detail_pane.course_info = info;
                    s.detail_pane.detail_data_loaded = true;
                }),
                Err(e) => {
                    warn!("course info failed: {}", e);
                    let message = FetchTarget::Detail.message(&e);
                    state.send_modify(|s| s.error_message = message);
                }
            }
            state.send_modify(|s| s.detail_pane.detail_refreshing = false);
        });
    }

    /// Shows the detail pane for a course from the list.
    pub fn select_course(&self, course: &Course) {
        self.get_course_info(course.term, course.class_number());
    }
}
