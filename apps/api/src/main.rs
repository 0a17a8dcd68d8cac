//! # Clientele API server
//!
//! ```text
//! Client ───► HTTP (9999) ───► Handlers ───► SQLite
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use clientele_api::{router, telemetry, ApiConfig, AppState};
use clientele_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    info!("Starting Clientele API server...");

    let config = ApiConfig::load()?;
    info!(
        addr = %config.bind_address(),
        database = %config.database_url,
        "Configuration loaded"
    );

    // Opens the pool and applies migrations
    let db = Database::new(config.db_config())
        .await
        .context("failed to open database")?;

    let state = Arc::new(AppState::new(db.clone()));
    let app = router(state);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
