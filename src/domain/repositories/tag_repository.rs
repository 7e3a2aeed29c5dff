//! Repository trait for tag data access.

use crate::domain::entities::{NewTag, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for post tags.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Creates a tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError>;

    /// Lists all tags ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;
}
