//! DTOs for the markdown preview endpoint.

use serde::{Deserialize, Serialize};

/// Raw markdown text to render.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub text: String,
}

/// Sanitized HTML rendering of the submitted markdown.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
}
