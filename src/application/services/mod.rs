mod auth_service;
mod comment_service;
mod post_service;
mod taxonomy_service;

pub use auth_service::AuthService;
pub use comment_service::{COMMENTS_PER_PAGE, CommentService};
pub use post_service::{POSTS_PER_PAGE, PostInput, PostService};
pub use taxonomy_service::TaxonomyService;
