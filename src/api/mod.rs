use std::collections::HashSet;

use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{AnnotatedCourse, CourseInfo, FavoriteToggle, Modality, SearchStatus};
use crate::query::catalog::{self, GEN_EDS};
use crate::query::{Catalog, SearchRequest};
use crate::services;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub term: Option<i32>,
    #[serde(default)]
    pub q: String,
    /// Comma separated; absent means every class type.
    pub types: Option<String>,
    /// Comma separated GE codes.
    pub ge: Option<String>,
    /// `open` or `all`.
    pub status: Option<String>,
}

impl SearchParams {
    pub fn into_request(self) -> Result<SearchRequest, AppError> {
        let modalities = match self.types {
            Some(raw) => split_list(&raw)
                .map(|t| t.parse::<Modality>().map_err(AppError::BadRequest))
                .collect::<Result<Vec<_>, _>>()?,
            None => Modality::ALL.to_vec(),
        };

        let gen_eds = match self.ge {
            Some(raw) => split_list(&raw)
                .map(|g| {
                    let code = g.to_uppercase();
                    if GEN_EDS.contains(&code.as_str()) {
                        Ok(code)
                    } else {
                        Err(AppError::BadRequest(format!("unknown GE code: {}", g)))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let status = match self.status {
            Some(raw) => raw.parse::<SearchStatus>().map_err(AppError::BadRequest)?,
            None => SearchStatus::All,
        };

        Ok(SearchRequest {
            term: self.term.unwrap_or_else(catalog::default_term),
            query: self.q,
            modalities,
            gen_eds,
            status,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Optional body of the toggle request; the id is used when absent.
#[derive(Debug, Default, Deserialize)]
struct ToggleParams {
    #[serde(default)]
    short_name: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(catalog))
        .route("/courses/search", get(search_courses))
        .route("/courses/{term}/{class_number}", get(course_info))
        .route("/favorites", get(list_favorites))
        .route("/favorites/ids", get(favorite_ids))
        .route("/favorites/{id}/toggle", post(toggle_favorite))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn catalog() -> Json<Catalog> {
    Json(Catalog::current())
}

async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<AnnotatedCourse>>, AppError> {
    let request = params.into_request()?;
    let courses = services::search_courses(&state.db, &state.courses, &request).await?;
    Ok(Json(courses))
}

async fn course_info(
    State(state): State<AppState>,
    Path((term, class_number)): Path<(i32, String)>,
) -> Result<Json<CourseInfo>, AppError> {
    if class_number.is_empty() || !class_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!(
            "invalid class number: {}",
            class_number
        )));
    }
    let info = state.courses.course_info(term, &class_number).await?;
    Ok(Json(info))
}

async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnnotatedCourse>>, AppError> {
    let courses = services::favorite_courses(&state.db, &state.courses).await?;
    Ok(Json(courses))
}

async fn favorite_ids(State(state): State<AppState>) -> Result<Json<HashSet<String>>, AppError> {
    let ids = repository::select_all(&state.db).await?;
    Ok(Json(ids))
}

async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<ToggleParams>>,
) -> Result<Json<FavoriteToggle>, AppError> {
    let short_name = body.map(|Json(params)| params.short_name).unwrap_or_default();
    let outcome = services::toggle_favorite(&state.db, &id, &short_name).await?;
    Ok(Json(outcome))
}
