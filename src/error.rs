use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Connection failed: {0}")]
    Connectivity(String),

    #[error("Request timed out")]
    Timeout,

    #[error("{0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return AppError::Timeout;
        }
        if e.is_connect() {
            return AppError::Connectivity(e.to_string());
        }
        if let Some(status) = e.status() {
            if status.is_client_error() {
                return AppError::BadRequest(status.to_string());
            }
        }
        if e.is_decode() {
            return AppError::Remote(format!("Failed to parse response: {}", e));
        }
        AppError::Remote(e.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Connectivity(msg) => {
                error!("upstream unreachable: {}", msg);
                (StatusCode::BAD_GATEWAY, "No Internet connection".to_string())
            }
            AppError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Connection timed out".to_string(),
            ),
            AppError::Remote(msg) => {
                error!("upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, format!("An error occurred: {}", msg))
            }
            AppError::Database(e) => {
                error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
            AppError::Migration(e) => {
                error!("migration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
