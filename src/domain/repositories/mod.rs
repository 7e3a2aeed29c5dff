//! Repository traits decoupling services from the persistence layer.

mod category_repository;
mod comment_repository;
mod post_repository;
mod session_repository;
mod tag_repository;
mod user_repository;

pub use category_repository::CategoryRepository;
pub use comment_repository::CommentRepository;
pub use post_repository::PostRepository;
pub use session_repository::SessionRepository;
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
