use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::handlers::form;
use crate::state::AppState;

/// Entry form routes mounted at the root.
///
/// ```text
/// GET  /  -> show_form     (timed out)
/// POST /  -> submit_form   (runs to completion)
/// ```
///
/// The submit handler appends on a blocking task that cannot be cancelled,
/// so it stays outside the timeout: a timed-out response would otherwise
/// report failure for an entry that is still saved.
pub fn router(timeout: TimeoutLayer) -> Router<AppState> {
    Router::new().route(
        "/",
        get(form::show_form)
            .layer(timeout)
            .post(form::submit_form),
    )
}
