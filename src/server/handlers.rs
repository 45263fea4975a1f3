use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::{
    catalog::Catalogs,
    pipeline::{MoodChoice, PipelineRunner, PipelineStatus, RunRequest},
    server::{
        error::{ApiError, ApiResult},
        page, AppState,
    },
};

pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let categories_file = state.config.paths.categories_file();
    let audio_file = state.config.paths.audio_catalogue_file();

    let catalogs = tokio::task::spawn_blocking(move || Catalogs::load(&categories_file, &audio_file))
        .await
        .map_err(|e| ApiError::Internal(format!("Catalogue task failed: {}", e)))??;

    Ok(Html(page::render_index(&catalogs, &state.status.snapshot())))
}

pub async fn status(State(state): State<AppState>) -> Json<PipelineStatus> {
    Json(state.status.snapshot())
}

pub async fn videos(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "videos": state.status.videos() }))
}

pub async fn run_pipeline(
    State(state): State<AppState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;

    if request.categories.is_empty() {
        return Err(ApiError::BadRequest("No categories selected".to_string()));
    }

    // One run at a time; later requests wait here
    let _guard = state.run_lock.lock().await;
    let audio_mood = request
        .audio_mood
        .unwrap_or_else(|| state.config.audio.default_mood.clone());
    info!(
        "Run requested for categories: {:?}, audio mood: {}",
        request.categories, audio_mood
    );

    let runner = PipelineRunner::new(state.config.as_ref().clone(), state.status.clone());
    let mood = MoodChoice::Fixed(audio_mood);
    let categories = request.categories;

    let result = tokio::task::spawn_blocking(move || runner.run(&categories, &mood)).await;
    let videos = match result {
        Ok(outcome) => outcome?,
        Err(e) => {
            error!("Pipeline task panicked: {}", e);
            state.status.fail();
            return Err(ApiError::Internal(e.to_string()));
        }
    };

    Ok(Json(json!({
        "status": "success",
        "message": format!("Generated {} videos", videos.len()),
        "videos": videos,
    })))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(page::render_not_found()))
}
