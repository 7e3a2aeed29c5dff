//! Shared application state passed to every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, CommentService, PostService, TaxonomyService};
use crate::infrastructure::persistence::{
    PgCategoryRepository, PgCommentRepository, PgPostRepository, PgSessionRepository,
    PgTagRepository,
};
use crate::infrastructure::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub posts: Arc<PostService<PgPostRepository>>,
    pub comments: Arc<CommentService<PgCommentRepository, PgPostRepository>>,
    pub taxonomy: Arc<TaxonomyService<PgCategoryRepository, PgTagRepository>>,
    pub auth: Arc<AuthService<PgSessionRepository>>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// Wires repositories and services around a database pool and session store.
    pub fn new(db: Arc<PgPool>, sessions: Arc<dyn SessionStore>, signing_secret: String) -> Self {
        let post_repository = Arc::new(PgPostRepository::new(db.clone()));
        let comment_repository = Arc::new(PgCommentRepository::new(db.clone()));
        let category_repository = Arc::new(PgCategoryRepository::new(db.clone()));
        let tag_repository = Arc::new(PgTagRepository::new(db.clone()));
        let session_repository = Arc::new(PgSessionRepository::new(db.clone()));

        Self {
            db,
            posts: Arc::new(PostService::new(post_repository.clone())),
            comments: Arc::new(CommentService::new(comment_repository, post_repository)),
            taxonomy: Arc::new(TaxonomyService::new(category_repository, tag_repository)),
            auth: Arc::new(AuthService::new(session_repository, signing_secret)),
            sessions,
        }
    }
}
