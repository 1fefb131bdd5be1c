//! HTTP server initialization and runtime setup.
//!
//! Handles store backend selection, connection setup, and the Axum server
//! lifecycle.

use crate::application::services::{CollisionPolicy, ShortenerService};
use crate::config::Config;
use crate::domain::repositories::MappingStore;
use crate::infrastructure::persistence::{MemoryMappingStore, PgMappingStore, RedisMappingStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured mapping store backend (connect + migrate for Postgres)
/// - The shortener service with collision policy and operation timeout
/// - The Axum HTTP server with graceful shutdown on SIGINT
///
/// # Errors
///
/// Returns an error if:
/// - The store backend cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let collision_policy: CollisionPolicy = config
        .collision_policy
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let shortener = Arc::new(ShortenerService::new(
        store,
        collision_policy,
        Duration::from_secs(config.store_timeout_seconds),
    ));

    let state = AppState { shortener };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Builds the mapping store selected by `STORE_BACKEND`.
async fn build_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    match config.store_backend.as_str() {
        "postgres" => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;

            let pool = PgPool::connect(url).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            Ok(Arc::new(PgMappingStore::new(Arc::new(pool))))
        }
        "redis" => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set for the redis backend")?;

            let store = RedisMappingStore::connect(url).await?;
            Ok(Arc::new(store))
        }
        "memory" => {
            tracing::warn!("Using in-memory store; mappings will not survive a restart");
            Ok(Arc::new(MemoryMappingStore::new()))
        }
        other => anyhow::bail!("Unknown store backend '{}'", other),
    }
}

/// Completes when the process receives SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
