//! Markdown preview endpoint for the post editor.

use axum::Json;

use crate::utils::markdown::render_markdown;
use crate::web::dto::{PreviewRequest, PreviewResponse};

/// Renders submitted markdown to sanitized HTML.
///
/// # Endpoint
///
/// `POST /preview` (public; nothing is persisted)
///
/// # Request
///
/// ```json
/// { "text": "# Heading\n\nSome *markdown*." }
/// ```
///
/// # Response
///
/// ```json
/// { "html": "<h1>Heading</h1>\n<p>Some <em>markdown</em>.</p>\n" }
/// ```
///
/// The output passes through the same sanitizer as stored post bodies, so
/// the preview matches what the detail page will render.
pub async fn preview_handler(Json(request): Json<PreviewRequest>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        html: render_markdown(&request.text),
    })
}
