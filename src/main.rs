use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slug_courses::api::router;
use slug_courses::db;
use slug_courses::remote::{CourseApiConfig, CourseSource, NoopCourseSource, SupabaseCourseClient};
use slug_courses::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "slug_courses=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://slug_courses.db?mode=rwc".to_string());

    let pool = db::connect(&database_url).await?;

    let courses: Arc<dyn CourseSource> = match CourseApiConfig::new_from_env() {
        Ok(config) => Arc::new(SupabaseCourseClient::new(config)?),
        Err(e) => {
            warn!("{}; course search is disabled", e);
            Arc::new(NoopCourseSource)
        }
    };

    let state = AppState { db: pool.clone(), courses };

    let app = router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
