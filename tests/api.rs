use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use ranking_reels::{
    config::Config,
    server::{create_router, AppState},
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let router = create_router(AppState::new(Config::with_root(dir.path())));
    (dir, router)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn run_pipeline(app: &Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/run_pipeline")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_initial_status() {
    let (_dir, app) = app();

    let (status, body) = get_json(&app, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data_collection"], "not_started");
    assert_eq!(body["video_generation"], "not_started");
    assert_eq!(body["last_run"], Value::Null);
    assert_eq!(body["videos_generated"], json!([]));
}

#[tokio::test]
async fn test_empty_categories_rejected() {
    let (_dir, app) = app();

    let (status, body) = run_pipeline(&app, r#"{"categories": [], "audio_mood": "calm"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No categories selected");

    let (_, status_body) = get_json(&app, "/api/status").await;
    assert_eq!(status_body["data_collection"], "not_started");
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let (_dir, app) = app();

    let (status, body) = run_pipeline(&app, r#"{"categories": "#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = run_pipeline(&app, r#"{"categories": "Best Campus Food"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unmatched_selection_succeeds_with_no_videos() {
    let (_dir, app) = app();

    let (status, body) = run_pipeline(&app, r#"{"categories": ["Marine Biology Programs"]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Generated 0 videos");
    assert_eq!(body["videos"], json!([]));

    let (_, status_body) = get_json(&app, "/api/status").await;
    assert_eq!(status_body["data_collection"], "completed");
    assert_eq!(status_body["video_generation"], "completed");
    assert!(status_body["last_run"].is_string());
}

#[tokio::test]
async fn test_run_publishes_videos() {
    let (_dir, app) = app();

    let (status, body) = run_pipeline(&app, r#"{"categories": ["Best Campus Food"], "audio_mood": "Ambient"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Generated 1 videos");

    let video = &body["videos"][0];
    assert_eq!(video["category"], "Best Campus Food");
    assert_eq!(video["audio_mood"], "ambient");

    let (_, listed) = get_json(&app, "/api/videos").await;
    assert_eq!(listed["videos"], body["videos"]);

    let url = video["url"].as_str().unwrap();
    let (status, content) = send(&app, Request::builder().uri(url).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(content).unwrap().contains("AUDIO DESCRIPTION:"));
}

#[tokio::test]
async fn test_index_page_uses_default_catalogues() {
    let (_dir, app) = app();

    let (status, body) = send(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Most Beautiful Ivy League Campuses"));
    assert!(html.contains("<option value=\"inspirational\""));
}

#[tokio::test]
async fn test_index_survives_undecodable_catalogue() {
    let (dir, app) = app();
    std::fs::write(dir.path().join("college_ranking_categories.md"), b"## Sec\n- **Bad \xff\xfe**\n").unwrap();

    let (status, body) = send(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Best Campus Food"));
}

#[tokio::test]
async fn test_unknown_route_is_html_404() {
    let (_dir, app) = app();

    let (status, body) = send(&app, Request::builder().uri("/nope").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8(body).unwrap().contains("404 - Page Not Found"));
}
