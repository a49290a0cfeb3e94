pub mod dto;

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::{Course, CourseInfo};
use crate::query::SearchFilter;

const DEFAULT_SEARCH_FUNCTION: &str = "search_courses";
const DEFAULT_CLASS_API_URL: &str =
    "https://my.ucsc.edu/PSIGW/RESTListeningConnector/PSFT_CSPRD/SCX_CLASS_DETAIL.v1";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Debug)]
pub struct CourseApiConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub search_function: String,
    pub class_api_url: String,
    pub timeout: Duration,
}

impl CourseApiConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let supabase_url = env::var("SUPABASE_URL")
            .map_err(|_| AppError::Config("SUPABASE_URL is not set".to_string()))?;
        let supabase_key = env::var("SUPABASE_KEY")
            .map_err(|_| AppError::Config("SUPABASE_KEY is not set".to_string()))?;
        let search_function = env::var("SEARCH_FUNCTION")
            .unwrap_or_else(|_| DEFAULT_SEARCH_FUNCTION.to_string());
        let class_api_url = env::var("CLASS_API_URL")
            .unwrap_or_else(|_| DEFAULT_CLASS_API_URL.to_string());
        let timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!("REQUEST_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_key,
            search_function,
            class_api_url: class_api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Read-only access to remote course data.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Runs a filtered search; results come back in listing order.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Course>, AppError>;
    /// Looks up the given course ids, in listing order. Unknown ids are skipped.
    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<Course>, AppError>;
    async fn course_info(&self, term: i32, class_number: &str) -> Result<CourseInfo, AppError>;
}

pub struct SupabaseCourseClient {
    client: Client,
    config: CourseApiConfig,
}

impl SupabaseCourseClient {
    pub fn new(config: CourseApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn rest_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, AppError> {
        let base = format!("{}/rest/v1/{}", self.config.supabase_url, path);
        Url::parse_with_params(&base, params)
            .map_err(|e| AppError::Config(format!("Invalid course api url {}: {}", base, e)))
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<dto::PostgrestError>(&body)
                .map(|e| e.describe(&status.to_string()))
                .unwrap_or_else(|_| format!("{} {}", status, body));
            tracing::warn!("course api returned {}: {}", status, detail);
            return if status.is_client_error() {
                Err(AppError::BadRequest(detail))
            } else {
                Err(AppError::Remote(format!("Course API error {}", detail)))
            };
        }

        response.json::<T>().await.map_err(AppError::from)
    }
}

#[async_trait]
impl CourseSource for SupabaseCourseClient {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Course>, AppError> {
        let url = self.rest_url(
            &format!("rpc/{}", self.config.search_function),
            &[("order", dto::COURSE_ORDER)],
        )?;
        tracing::debug!("searching courses: {:?}", filter);

        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.supabase_key)
            .bearer_auth(&self.config.supabase_key)
            .json(filter)
            .send()
            .await?;

        let courses: Vec<Course> = self.decode(response).await?;
        tracing::info!("search returned {} courses", courses.len());
        Ok(courses)
    }

    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<Course>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_filter = dto::in_filter(ids);
        let url = self.rest_url(
            "courses",
            &[("select", "*"), ("id", id_filter.as_str()), ("order", dto::COURSE_ORDER)],
        )?;

        let response = self
            .client
            .get(url)
            .header("apikey", &self.config.supabase_key)
            .bearer_auth(&self.config.supabase_key)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn course_info(&self, term: i32, class_number: &str) -> Result<CourseInfo, AppError> {
        let mut url = Url::parse(&self.config.class_api_url).map_err(|e| {
            AppError::Config(format!("Invalid class api url {}: {}", self.config.class_api_url, e))
        })?;
        let url_display = url.to_string();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("Class api url cannot be a base: {}", url_display)))?
            .push(&term.to_string())
            .push(class_number);
        tracing::debug!("fetching course info from {}", url);

        let response = self.client.get(url).send().await?;
        self.decode(response).await
    }
}

/// Source with no courses; detail lookups report not found.
pub struct NoopCourseSource;

#[async_trait]
impl CourseSource for NoopCourseSource {
    async fn search(&self, _filter: &SearchFilter) -> Result<Vec<Course>, AppError> {
        Ok(Vec::new())
    }

    async fn fetch_by_ids(&self, _ids: &[String]) -> Result<Vec<Course>, AppError> {
        Ok(Vec::new())
    }

    async fn course_info(&self, _term: i32, _class_number: &str) -> Result<CourseInfo, AppError> {
        Err(AppError::NotFound)
    }
}
