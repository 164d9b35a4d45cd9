//! Handlers for the entry form page.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;

use crate::controller::{EntryFields, FormAction, FormOutcome};
use crate::error::{AppError, AppResult};
use crate::page::FormPage;
use crate::state::AppState;

/// GET /
///
/// Render the empty form and the chart of all saved entries.
pub async fn show_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let outcome = run(&state, FormAction::Load).await?;
    render(&EntryFields::default(), &outcome)
}

/// POST /
///
/// Validate and save one entry, then re-render the page. Rejected input is
/// reported in the page's error region with a 200 status.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<EntryFields>,
) -> AppResult<Html<String>> {
    let outcome = run(&state, FormAction::Submit(fields.clone())).await?;

    if !outcome.error.is_empty() {
        tracing::info!(error = %outcome.error, "Entry rejected");
    }

    render(&fields, &outcome)
}

/// Drive the synchronous controller on the blocking pool.
async fn run(state: &AppState, action: FormAction) -> AppResult<FormOutcome> {
    let controller = Arc::clone(&state.controller);
    let outcome = tokio::task::spawn_blocking(move || controller.handle(action))
        .await
        .map_err(|e| AppError::InternalError(format!("Form task failed: {e}")))??;
    Ok(outcome)
}

fn render(fields: &EntryFields, outcome: &FormOutcome) -> AppResult<Html<String>> {
    Ok(Html(FormPage::new(fields, outcome).render()?))
}
