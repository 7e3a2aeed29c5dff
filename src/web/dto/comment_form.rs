//! DTO for the comment submission form.

use serde::Deserialize;
use validator::Validate;

/// Form body posted from the post detail page.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1 to 2000 characters"))]
    pub body: String,
}
