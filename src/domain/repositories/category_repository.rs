//! Repository trait for category data access.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for post categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Renames a category found by slug. The slug itself stays stable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category has the given slug.
    async fn update_name(&self, slug: &str, name: &str) -> Result<Category, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError>;

    /// Lists all categories ordered by name.
    async fn list(&self) -> Result<Vec<Category>, AppError>;
}
