//! DTOs for the JSON post create/update endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::PostInput;
use crate::domain::entities::PostStatus;

/// Compiled regex for the post status field.
static STATUS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(draft|published)$").unwrap());

/// Payload for creating or updating a post.
#[derive(Debug, Deserialize, Validate)]
pub struct PostForm {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body must not be empty"))]
    pub body: String,

    /// Publication status: `draft` or `published`.
    #[validate(regex(path = "*STATUS_REGEX", message = "Status must be 'draft' or 'published'"))]
    pub status: String,

    /// Optional category; posts without a category are allowed.
    pub category_id: Option<i64>,

    /// Tags attached to the post.
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl PostForm {
    /// Converts the validated form into service input.
    ///
    /// Must only be called after [`Validate::validate`] has passed, which
    /// guarantees the status string parses.
    pub fn into_input(self) -> PostInput {
        let status = PostStatus::parse(&self.status).unwrap_or(PostStatus::Draft);

        PostInput {
            title: self.title,
            body: self.body,
            status,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
        }
    }
}

/// JSON envelope returned by the post mutation endpoints.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,

    /// Where the client should navigate after a successful mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    /// Per-field validation messages, present on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl MutationResponse {
    pub fn success(message: impl Into<String>, redirect_url: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            redirect_url: Some(redirect_url.into()),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>, errors: serde_json::Value) -> Self {
        Self {
            success: false,
            message: message.into(),
            redirect_url: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PostForm {
        PostForm {
            title: "A Post".to_string(),
            body: "Some text".to_string(),
            status: "published".to_string(),
            category_id: None,
            tag_ids: vec![],
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let mut form = valid_form();
        form.title = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_unknown_status_fails() {
        let mut form = valid_form();
        form.status = "archived".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_into_input_parses_status() {
        let input = valid_form().into_input();
        assert_eq!(input.status, PostStatus::Published);
    }

    #[test]
    fn test_success_response_omits_errors() {
        let json = serde_json::to_value(MutationResponse::success("ok", "/")).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("errors").is_none());
    }
}
