//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, session store setup, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::session::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis session store (or in-memory fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let sessions: Arc<dyn SessionStore> = if let Some(redis_url) = &config.redis_url {
        match RedisSessionStore::connect(redis_url, config.session_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Visitor sessions stored in Redis");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory sessions.", e);
                Arc::new(MemorySessionStore::new())
            }
        }
    } else {
        tracing::info!("Visitor sessions stored in memory");
        Arc::new(MemorySessionStore::new())
    };

    let state = AppState::new(
        Arc::new(pool),
        sessions,
        config.session_signing_secret.clone(),
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
