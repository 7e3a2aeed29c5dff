//! Static content pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::HeaderMap;
use axum::response::Response;

use crate::web::flash::{self, Flash};
use crate::web::menu::{MENU, MenuItem};

/// Template for the about page.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub title: String,
    pub menu: &'static [MenuItem],
    pub flashes: Vec<Flash>,
}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /about`
pub async fn about_handler(headers: HeaderMap) -> Response {
    let flashes = flash::take(&headers);
    let had_flashes = !flashes.is_empty();

    let template = AboutTemplate {
        title: "About".to_string(),
        menu: MENU,
        flashes,
    };

    flash::rendered_with_clear(template, had_flashes)
}
