//! `boatlog-api` -- the tinfoil boat entry form server.
//!
//! Serves the entry form, appends valid entries to the CSV backing file and
//! rewrites the standalone chart file on every render. See
//! [`ServerConfig::from_env`] for the environment variables it reads.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boatlog_api::config::ServerConfig;
use boatlog_api::controller::FormController;
use boatlog_api::router::build_app_router;
use boatlog_api::state::AppState;
use boatlog_db::CsvRecordStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boatlog_api=debug,boatlog_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    tracing::info!(
        addr = %config.socket_addr(),
        data_file = %config.data_file.display(),
        plot_file = %config.plot_file.display(),
        "Loaded server configuration",
    );

    // --- Record store ---
    let store = CsvRecordStore::open(&config.data_file).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to open backing file");
        std::process::exit(1);
    });
    match boatlog_db::health_check(&store) {
        Ok(count) => tracing::info!(records = count, "Backing file loaded"),
        // Keep serving; every request will report the failure.
        Err(e) => tracing::error!(error = %e, "Backing file is not readable"),
    }

    // --- App state ---
    let controller = FormController::new(Arc::new(store), Some(config.plot_file.clone()));
    let state = AppState {
        config: Arc::new(config.clone()),
        controller: Arc::new(controller),
    };

    let app = build_app_router(state);

    // --- Start server ---
    let addr = config.socket_addr();
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
