//! DTOs for category and tag management forms.

use serde::Deserialize;
use validator::Validate;

/// Form body for creating a category or tag, or renaming a category.
#[derive(Debug, Deserialize, Validate)]
pub struct NameForm {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,
}
