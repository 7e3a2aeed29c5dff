//! Repository trait for comment data access.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for post comments.
///
/// Public listing methods only ever see accepted comments; the moderation
/// gate is applied in the queries themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment in the `unchecked` state.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Lists accepted comments for a post, oldest first, with paging.
    async fn list_accepted(
        &self,
        post_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, AppError>;

    /// Counts accepted comments for a post.
    async fn count_accepted(&self, post_id: i64) -> Result<i64, AppError>;
}
