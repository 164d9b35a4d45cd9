//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use boatlog_api::config::ServerConfig;
use boatlog_api::controller::FormController;
use boatlog_api::router::build_app_router;
use boatlog_api::state::AppState;
use boatlog_db::RecordStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        data_file: PathBuf::from("unused.csv"),
        plot_file: PathBuf::from("unused.html"),
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack. No chart file is written.
pub fn build_test_app(store: Arc<dyn RecordStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: Arc<dyn RecordStore>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
        controller: Arc::new(FormController::new(store, None)),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Text inside the page's inline error region.
pub fn error_region(html: &str) -> &str {
    let start_tag = r#"<div id="error_msg" style="color: red;">"#;
    let start = html.find(start_tag).expect("error region present") + start_tag.len();
    let end = html[start..].find("</div>").expect("error region closed") + start;
    &html[start..end]
}
