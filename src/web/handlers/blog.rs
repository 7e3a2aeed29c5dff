//! Post listing pages: front page, per-category, and per-tag.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};

use crate::domain::entities::{Post, PostFilter};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::paginate::Page;
use crate::web::dto::{ListingQuery, PageQuery};
use crate::web::flash::{self, Flash};
use crate::web::menu::{MENU, MenuItem};

/// Template for the paginated post listing.
///
/// Renders `templates/blog.html` with:
/// - One page of published posts, newest first
/// - The search form, pre-filled with the current query
/// - Pagination links rooted at `base_path`
#[derive(Template, WebTemplate)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub title: String,
    pub menu: &'static [MenuItem],
    pub flashes: Vec<Flash>,
    pub posts: Page<Post>,
    pub search: String,
    pub search_category: bool,
    pub search_tag: bool,
    pub search_comments: bool,
    pub base_path: String,
}

fn render_listing(
    title: String,
    base_path: String,
    posts: Page<Post>,
    filter: &PostFilter,
    headers: &HeaderMap,
) -> Response {
    let flashes = flash::take(headers);
    let had_flashes = !flashes.is_empty();

    let template = BlogTemplate {
        title,
        menu: MENU,
        flashes,
        posts,
        search: filter.query.clone().unwrap_or_default(),
        search_category: filter.in_categories,
        search_tag: filter.in_tags,
        search_comments: filter.in_comments,
        base_path,
    };

    flash::rendered_with_clear(template, had_flashes)
}

/// Renders the front page listing.
///
/// # Endpoint
///
/// `GET /?search=...&search_category=on&search_tag=on&search_comments=on&page=N`
///
/// Only published posts are listed. Page resolution is forgiving: a
/// non-numeric `page` shows the first page, an out-of-range one the last.
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let filter = query.to_filter();
    let posts = state
        .posts
        .list_published(&filter, query.page.as_deref())
        .await?;

    Ok(render_listing(
        "Blog".to_string(),
        "/".to_string(),
        posts,
        &filter,
        &headers,
    ))
}

/// Renders the listing restricted to one category.
///
/// # Endpoint
///
/// `GET /category/{slug}?page=N`
///
/// # Errors
///
/// Returns `404 Not Found` if the category does not exist.
pub async fn category_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let category = state.taxonomy.get_category(&slug).await?;

    let filter = PostFilter::for_category(&slug);
    let posts = state
        .posts
        .list_published(&filter, query.page.as_deref())
        .await?;

    Ok(render_listing(
        format!("Category: {}", category.name),
        format!("/category/{slug}"),
        posts,
        &filter,
        &headers,
    ))
}

/// Renders the listing restricted to one tag.
///
/// # Endpoint
///
/// `GET /tag/{slug}?page=N`
///
/// # Errors
///
/// Returns `404 Not Found` if the tag does not exist.
pub async fn tag_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let tag = state.taxonomy.get_tag(&slug).await?;

    let filter = PostFilter::for_tag(&slug);
    let posts = state
        .posts
        .list_published(&filter, query.page.as_deref())
        .await?;

    Ok(render_listing(
        format!("Tag: {}", tag.name),
        format!("/tag/{slug}"),
        posts,
        &filter,
        &headers,
    ))
}
