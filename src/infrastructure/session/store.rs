//! Session store trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during session store operations.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session store connection error: {0}")]
    Connection(String),
    #[error("Session store operation error: {0}")]
    Operation(String),
}

/// Result type for session store operations.
pub type SessionResult<T> = Result<T, SessionStoreError>;

/// Trait for per-visitor session flags, currently the "post already viewed"
/// markers that keep the view counter to one increment per session.
///
/// Implementations must be thread-safe and fail open: a store error is
/// treated as "not viewed yet", which at worst double-counts a view. The
/// flag is advisory by design; the counter increment itself is atomic.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::RedisSessionStore`] - Redis-backed, with TTL
/// - [`crate::infrastructure::session::MemorySessionStore`] - in-process fallback
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns whether this visitor session has already viewed the post.
    ///
    /// Errors are logged by implementations and surface as `Ok(false)`.
    async fn was_viewed(&self, session_id: &str, post_id: i64) -> SessionResult<bool>;

    /// Marks the post as viewed for this visitor session.
    ///
    /// Implementations should log errors and return `Ok(())` rather than
    /// disrupt the request flow.
    async fn mark_viewed(&self, session_id: &str, post_id: i64) -> SessionResult<()>;

    /// Checks if the store backend is healthy.
    ///
    /// Used by the health endpoint to report session store status.
    async fn health_check(&self) -> bool;
}
