//! Repository trait for user accounts.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts, used by the admin CLI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    async fn create(&self, username: &str) -> Result<User, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists all users ordered by creation time.
    async fn list(&self) -> Result<Vec<User>, AppError>;
}
