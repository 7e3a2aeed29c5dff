//! PostgreSQL repository implementations.

mod pg_category_repository;
mod pg_comment_repository;
mod pg_post_repository;
mod pg_session_repository;
mod pg_tag_repository;
mod pg_user_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;
