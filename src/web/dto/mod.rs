//! Request and response DTOs for the web layer.

pub mod comment_form;
pub mod health;
pub mod listing;
pub mod post_form;
pub mod preview;
pub mod taxonomy_form;

pub use comment_form::CommentForm;
pub use listing::{ListingQuery, PageQuery};
pub use post_form::{MutationResponse, PostForm};
pub use preview::{PreviewRequest, PreviewResponse};
pub use taxonomy_form::NameForm;
