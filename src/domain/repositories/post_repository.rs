//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostFilter, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for blog posts.
///
/// Covers creation, full-field updates, slug lookup, filtered listing with
/// pagination, and the atomic view-counter increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Creates a new post together with its tag links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Replaces the mutable fields of an existing post. Tag links are
    /// replaced wholesale; the slug is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has the given id.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError>;

    /// Finds a post by its slug, regardless of publication status.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError>;

    /// Lists **published** posts matching the filter, newest first,
    /// de-duplicated, with `limit`/`offset` paging.
    async fn search(
        &self,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, AppError>;

    /// Counts published posts matching the filter.
    async fn count(&self, filter: &PostFilter) -> Result<i64, AppError>;

    /// Atomically increments the view counter by one.
    ///
    /// A single `views = views + 1` update, so two concurrent increments
    /// never lose a count.
    async fn increment_views(&self, id: i64) -> Result<(), AppError>;
}
