//! Tests for `AppError` → HTTP response mapping, plus a store failure
//! surfacing through the form route.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use boatlog_api::error::AppError;
use boatlog_core::record::BoatRecord;
use boatlog_db::{RecordStore, StoreError};
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and body text.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn corrupt() -> StoreError {
    StoreError::Corrupt {
        path: "/srv/boat_data.csv".into(),
        reason: "line 3: bad row".into(),
    }
}

fn write_failed() -> StoreError {
    StoreError::WriteFailed {
        path: "/srv/boat_data.csv".into(),
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
    }
}

// ---------------------------------------------------------------------------
// Test: store errors map to 500 with a code and no internal detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corrupt_store_returns_500() {
    let (status, body) = error_to_response(AppError::Store(corrupt())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("STORE_CORRUPT"));
    assert!(!body.contains("/srv/boat_data.csv"));
    assert!(!body.contains("bad row"));
}

#[tokio::test]
async fn failed_write_returns_500() {
    let (status, body) = error_to_response(AppError::Store(write_failed())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("STORE_WRITE_FAILED"));
    assert!(body.contains("Your entry could not be saved."));
    assert!(!body.contains("disk full"));
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let (status, body) =
        error_to_response(AppError::InternalError("secret detail".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("INTERNAL_ERROR"));
    assert!(!body.contains("secret detail"));
}

// ---------------------------------------------------------------------------
// Test: a failing store turns a submit into a 500 page
// ---------------------------------------------------------------------------

struct ReadOnlyStore;

impl RecordStore for ReadOnlyStore {
    fn load_all(&self) -> Result<Vec<BoatRecord>, StoreError> {
        Ok(Vec::new())
    }

    fn append(&self, _record: &BoatRecord) -> Result<(), StoreError> {
        Err(write_failed())
    }
}

#[tokio::test]
async fn write_failure_surfaces_through_form() {
    let app = common::build_test_app(Arc::new(ReadOnlyStore));
    let response = common::post_form(
        app,
        "/",
        "last_name=Smith&first_name=Jane&num_pennies=5&boat_volume=12.3",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_text(response).await;
    assert!(body.contains("STORE_WRITE_FAILED"));
}

#[tokio::test]
async fn invalid_input_never_reaches_a_failing_store() {
    let app = common::build_test_app(Arc::new(ReadOnlyStore));
    let response = common::post_form(app, "/", "last_name=Smith").await;

    assert_eq!(response.status(), StatusCode::OK);
}
