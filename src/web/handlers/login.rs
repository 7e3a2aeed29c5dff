//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::HeaderMap;
use axum::response::Response;

use crate::web::flash::{self, Flash};
use crate::web::menu::{MENU, MenuItem};

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Session token input form
/// - Instructions for obtaining a token from the admin CLI
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub title: String,
    pub menu: &'static [MenuItem],
    pub flashes: Vec<Flash>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// # Authentication
///
/// Authors paste a session token issued by the admin CLI; the page stores
/// it in the `session_token` cookie for subsequent protected requests.
pub async fn login_handler(headers: HeaderMap) -> Response {
    let flashes = flash::take(&headers);
    let had_flashes = !flashes.is_empty();

    let template = LoginTemplate {
        title: "Log in".to_string(),
        menu: MENU,
        flashes,
    };

    flash::rendered_with_clear(template, had_flashes)
}
