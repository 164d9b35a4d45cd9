use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the backing file can be read.
    pub store_healthy: bool,
    /// Number of saved entries, when readable.
    pub record_count: Option<usize>,
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let controller = Arc::clone(&state.controller);
    let checked =
        tokio::task::spawn_blocking(move || boatlog_db::health_check(controller.store().as_ref()))
            .await;

    let record_count = match checked {
        Ok(Ok(count)) => Some(count),
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "Store health check failed");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "Store health check task failed");
            None
        }
    };

    let store_healthy = record_count.is_some();
    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        record_count,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
