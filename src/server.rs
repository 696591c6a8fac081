//! HTTP server initialization and runtime setup.
//!
//! Builds the configured store, applies migrations, and runs the Axum server
//! until Ctrl-C or SIGTERM.

use crate::config::{Config, StoreConfig};
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::persistence::{MemoryShortLinkRepository, PgShortLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let state = AppState::new(repository, &config.public_base_url);
    let app = app_router(state);

    let addr = config.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the repository selected by `STORE`.
async fn build_repository(config: &Config) -> Result<Arc<dyn ShortLinkRepository>> {
    match &config.store {
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory store; links are lost on restart");
            Ok(Arc::new(MemoryShortLinkRepository::new()))
        }
        StoreConfig::Postgres(db) => {
            let pool = PgPoolOptions::new()
                .max_connections(db.max_connections)
                .acquire_timeout(db.connect_timeout)
                .idle_timeout(db.idle_timeout)
                .max_lifetime(db.max_lifetime)
                .connect(&db.url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgShortLinkRepository::new(Arc::new(pool))))
        }
    }
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
