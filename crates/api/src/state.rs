use std::sync::Arc;

use crate::config::ServerConfig;
use crate::controller::FormController;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Form controller wrapping the record store.
    pub controller: Arc<FormController>,
}
