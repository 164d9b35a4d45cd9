use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use boatlog_db::StoreError;

use crate::page::ErrorPage;

/// Application-level error type for HTTP handlers.
///
/// Validation problems never reach this type; they are shown inline on the
/// form. Everything here halts the request with a generic failure page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Store(StoreError::Corrupt { .. }) => {
                tracing::error!(error = %self, "Backing file is corrupt");
                (
                    "STORE_CORRUPT",
                    "The saved entries could not be read. No changes were made.",
                )
            }
            AppError::Store(StoreError::Read { .. }) => {
                tracing::error!(error = %self, "Backing file is unreadable");
                (
                    "STORE_UNAVAILABLE",
                    "The saved entries could not be read. No changes were made.",
                )
            }
            AppError::Store(StoreError::WriteFailed { .. }) => {
                tracing::error!(error = %self, "Backing file write failed");
                ("STORE_WRITE_FAILED", "Your entry could not be saved.")
            }
            AppError::Template(_) | AppError::InternalError(_) => {
                tracing::error!(error = %self, "Internal error");
                ("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        let body = ErrorPage { code, message }
            .render()
            .unwrap_or_else(|_| format!("{code}: {message}"));

        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
