//! Redis-backed session store implementation.

use super::store::{SessionResult, SessionStore, SessionStoreError};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis session store for per-visitor view flags.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// All operations are fail-open: errors are logged but don't propagate to callers.
pub struct RedisSessionStore {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisSessionStore {
    /// Connects to Redis, validates the connection with a PING, and configures the flag TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - lifetime of "viewed" flags; controlled via `SESSION_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> SessionResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            SessionStoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            SessionStoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| SessionStoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "viewed:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, session_id: &str, post_id: i64) -> String {
        format!("{}{}:{}", self.key_prefix, session_id, post_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn was_viewed(&self, session_id: &str, post_id: i64) -> SessionResult<bool> {
        let key = self.build_key(session_id, post_id);
        let mut conn = self.client.clone();

        match conn.exists::<_, bool>(&key).await {
            Ok(seen) => {
                debug!("View flag {}: {}", key, seen);
                Ok(seen)
            }
            Err(e) => {
                error!("Redis EXISTS error for {}: {}", key, e);
                Ok(false)
            }
        }
    }

    async fn mark_viewed(&self, session_id: &str, post_id: i64) -> SessionResult<()> {
        let key = self.build_key(session_id, post_id);
        let mut conn = self.client.clone();

        match conn.set_ex::<_, _, ()>(&key, 1u8, self.ttl_seconds).await {
            Ok(_) => {
                debug!("View flag SET: {} (TTL: {}s)", key, self.ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
