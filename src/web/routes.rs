//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, add_category_page_handler, add_post_page_handler, add_tag_page_handler,
    category_handler, create_category_handler, create_post_handler, create_tag_handler,
    health_handler, index_handler, login_handler, preview_handler, show_post_handler,
    submit_comment_handler, tag_handler, update_category_handler, update_category_page_handler,
    update_post_handler, update_post_page_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Author routes requiring authentication.
///
/// Protected via [`crate::web::middleware::web_auth`] (session cookie).
///
/// # Endpoints
///
/// - `GET|POST /add_post` - Post editor and its JSON create endpoint
/// - `GET|POST /update_post/{slug}` - Post editor and its JSON update endpoint
/// - `GET|POST /add_category` - Category creation form
/// - `GET|POST /update_category/{slug}` - Category rename form
/// - `GET|POST /add_tag` - Tag creation form
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add_post",
            get(add_post_page_handler).post(create_post_handler),
        )
        .route(
            "/update_post/{slug}",
            get(update_post_page_handler).post(update_post_handler),
        )
        .route(
            "/add_category",
            get(add_category_page_handler).post(create_category_handler),
        )
        .route(
            "/update_category/{slug}",
            get(update_category_page_handler).post(update_category_handler),
        )
        .route(
            "/add_tag",
            get(add_tag_page_handler).post(create_tag_handler),
        )
}

/// Public routes without authentication.
///
/// # Endpoints
///
/// - `GET /` - Post listing with search and pagination
/// - `GET /category/{slug}` - Listing restricted to a category
/// - `GET /tag/{slug}` - Listing restricted to a tag
/// - `GET|POST /{slug}/view` - Post detail page and comment submission
///   (the POST checks the session cookie itself and redirects anonymous
///   visitors to the login page)
/// - `POST /preview` - Markdown preview (used by the editor, but not
///   itself authenticated)
/// - `GET /about` - About page
/// - `GET /login` - Login page
/// - `GET /health` - Component health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/category/{slug}", get(category_handler))
        .route("/tag/{slug}", get(tag_handler))
        .route(
            "/{slug}/view",
            get(show_post_handler).post(submit_comment_handler),
        )
        .route("/preview", post(preview_handler))
        .route("/about", get(about_handler))
        .route("/login", get(login_handler))
        .route("/health", get(health_handler))
}
