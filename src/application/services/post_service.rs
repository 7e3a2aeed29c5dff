//! Post listing, retrieval, and mutation service.

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostFilter, PostPatch, PostStatus};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::utils::paginate::{Page, Paginator};
use crate::utils::slug::slugify;
use serde_json::json;

/// Posts shown per listing page.
pub const POSTS_PER_PAGE: i64 = 4;

/// Validated input for creating or updating a post.
#[derive(Debug, Clone)]
pub struct PostInput {
    pub title: String,
    pub body: String,
    pub status: PostStatus,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

/// Service for querying and mutating blog posts.
///
/// Handles slug derivation and uniqueness, the published-only listing
/// filter, and page-number clamping.
pub struct PostService<P: PostRepository> {
    repository: Arc<P>,
}

impl<P: PostRepository> PostService<P> {
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Returns one page of published posts matching `filter`.
    ///
    /// The raw `page` parameter resolves per the listing contract: missing
    /// or non-numeric values fall back to page 1, out-of-range values clamp
    /// to the last page. Page size is fixed at [`POSTS_PER_PAGE`].
    pub async fn list_published(
        &self,
        filter: &PostFilter,
        raw_page: Option<&str>,
    ) -> Result<Page<Post>, AppError> {
        let total = self.repository.count(filter).await?;
        let paginator = Paginator::new(total, POSTS_PER_PAGE);
        let page = paginator.resolve(raw_page);

        let posts = self
            .repository
            .search(filter, POSTS_PER_PAGE, paginator.offset(page))
            .await?;

        Ok(paginator.page(posts, page))
    }

    /// Retrieves a post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches the slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "slug": slug })))
    }

    /// Records one view via the atomic counter increment.
    ///
    /// The per-session "already viewed" check happens at the handler level;
    /// this method is only called for first views within a session.
    pub async fn record_view(&self, post_id: i64) -> Result<(), AppError> {
        self.repository.increment_views(post_id).await?;
        metrics::counter!("minipress_post_views_total").increment(1);
        Ok(())
    }

    /// Creates a post, deriving a unique slug from the title.
    pub async fn create_post(&self, input: PostInput, author_id: i64) -> Result<Post, AppError> {
        let slug = self.unique_slug(&input.title).await?;

        let new_post = NewPost {
            title: input.title,
            slug,
            body: input.body,
            status: input.status,
            author_id,
            category_id: input.category_id,
            tag_ids: input.tag_ids,
        };

        self.repository.create(new_post).await
    }

    /// Updates a post found by slug. The slug itself stays stable so
    /// published URLs never break.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches the slug.
    pub async fn update_post(&self, slug: &str, input: PostInput) -> Result<Post, AppError> {
        let post = self.get_by_slug(slug).await?;

        let patch = PostPatch {
            title: input.title,
            body: input.body,
            status: input.status,
            category_id: input.category_id,
            tag_ids: input.tag_ids,
        };

        self.repository.update(post.id, patch).await
    }

    /// Derives a slug from the title and disambiguates collisions with a
    /// numeric suffix (`my-title`, `my-title-2`, ...).
    async fn unique_slug(&self, title: &str) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 50;

        let base = slugify(title);
        if base.is_empty() {
            return Err(AppError::bad_request(
                "Title does not produce a valid slug",
                json!({ "title": title }),
            ));
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = if attempt == 1 {
                base.clone()
            } else {
                format!("{base}-{attempt}")
            };

            if self.repository.find_by_slug(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "base": base }),
        ))
    }
}
