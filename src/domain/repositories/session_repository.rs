//! Repository trait for authenticated session storage.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for session tokens.
///
/// Only HMAC-SHA256 hashes of tokens are ever stored or looked up; the raw
/// token exists solely in the user's cookie and the admin CLI output.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session hash for a user.
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<(), AppError>;

    /// Resolves a non-revoked session hash to its user.
    ///
    /// Returns `Ok(None)` when the hash is unknown or the session was revoked.
    async fn find_user(&self, token_hash: &str) -> Result<Option<User>, AppError>;

    /// Updates the `last_used_at` timestamp for audit purposes.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;

    /// Revokes a session. Returns `true` if a live session was revoked.
    async fn revoke(&self, token_hash: &str) -> Result<bool, AppError>;
}
