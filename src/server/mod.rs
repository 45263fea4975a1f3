//! # Web Facade
//!
//! An axum server exposing the index page, the pipeline status, a run
//! endpoint and the generated static files.

pub mod error;
pub mod handlers;
pub mod page;
pub mod placeholder;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{config::Config, error::Result, pipeline::StatusHandle};

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub status: StatusHandle,

    /// Held for the duration of a pipeline run
    pub run_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            status: StatusHandle::new(),
            run_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Create the router with all endpoints and static file services
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.paths.static_dir();

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/status", get(handlers::status))
        .route("/api/run_pipeline", post(handlers::run_pipeline))
        .route("/api/videos", get(handlers::videos))
        .nest_service("/static/videos", ServeDir::new(static_dir.join("videos")))
        .nest_service("/static/css", ServeDir::new(static_dir.join("css")))
        .nest_service("/static/js", ServeDir::new(static_dir.join("js")))
        .nest_service("/static/images", ServeDir::new(static_dir.join("images")))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Prepare the data directories and serve until the process is stopped
pub async fn serve(config: Config) -> Result<()> {
    config.paths.ensure_dirs()?;
    placeholder::ensure_placeholder(&config.paths.static_dir().join("images"))?;

    let bind_addr = config.server.bind_addr.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
