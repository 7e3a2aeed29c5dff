//! Comment submission and public listing service.

use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::{CommentRepository, PostRepository};
use crate::error::AppError;
use crate::utils::paginate::{Page, Paginator};
use serde_json::json;

/// Accepted comments shown per page on the post detail view.
pub const COMMENTS_PER_PAGE: i64 = 20;

/// Service for submitting comments and listing the accepted ones.
pub struct CommentService<C: CommentRepository, P: PostRepository> {
    comment_repository: Arc<C>,
    post_repository: Arc<P>,
}

impl<C: CommentRepository, P: PostRepository> CommentService<C, P> {
    pub fn new(comment_repository: Arc<C>, post_repository: Arc<P>) -> Self {
        Self {
            comment_repository,
            post_repository,
        }
    }

    /// Submits a comment on the post identified by `post_slug`.
    ///
    /// The comment is stored in the `unchecked` state and stays invisible
    /// until an external moderation actor accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn submit(
        &self,
        post_slug: &str,
        author_id: i64,
        body: String,
    ) -> Result<Comment, AppError> {
        let post = self
            .post_repository
            .find_by_slug(post_slug)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "slug": post_slug })))?;

        let comment = self
            .comment_repository
            .create(NewComment {
                post_id: post.id,
                author_id,
                body,
            })
            .await?;

        metrics::counter!("minipress_comments_submitted_total").increment(1);

        Ok(comment)
    }

    /// Returns one page of accepted comments for a post, oldest first.
    ///
    /// Page resolution follows the listing contract (non-numeric to page 1,
    /// out-of-range clamps to the last page) at [`COMMENTS_PER_PAGE`].
    pub async fn list_for_post(
        &self,
        post_id: i64,
        raw_page: Option<&str>,
    ) -> Result<Page<Comment>, AppError> {
        let total = self.comment_repository.count_accepted(post_id).await?;
        let paginator = Paginator::new(total, COMMENTS_PER_PAGE);
        let page = paginator.resolve(raw_page);

        let comments = self
            .comment_repository
            .list_accepted(post_id, COMMENTS_PER_PAGE, paginator.offset(page))
            .await?;

        Ok(paginator.page(comments, page))
    }
}
