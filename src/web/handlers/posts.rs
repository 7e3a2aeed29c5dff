//! Post create/update form pages and their JSON mutation endpoints.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::domain::entities::{Category, Post, Tag};
use crate::error::{AppError, field_errors_json};
use crate::state::AppState;
use crate::web::dto::{MutationResponse, PostForm};
use crate::web::flash::{self, Flash};
use crate::web::menu::{MENU, MenuItem};
use crate::web::middleware::web_auth::CurrentUser;

/// Template for the post editor.
///
/// Renders `templates/post_form.html` with:
/// - Title, body, and status inputs (with markdown preview wiring)
/// - Category and tag selectors
/// - The existing post when editing
#[derive(Template, WebTemplate)]
#[template(path = "post_form.html")]
pub struct PostFormTemplate {
    pub title: String,
    pub menu: &'static [MenuItem],
    pub flashes: Vec<Flash>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub post: Option<Post>,
    /// Where the editor submits its JSON payload.
    pub action: String,
}

impl PostFormTemplate {
    /// Whether the tag is attached to the post being edited.
    fn tag_checked(&self, tag_id: &i64) -> bool {
        self.post
            .as_ref()
            .is_some_and(|p| p.tags.iter().any(|t| t.id == *tag_id))
    }

    /// Whether the category is the one on the post being edited.
    fn category_selected(&self, category: &str) -> bool {
        self.post
            .as_ref()
            .and_then(|p| p.category_name.as_deref())
            .is_some_and(|name| name == category)
    }

    /// Status of the post being edited, defaulting to draft for new posts.
    fn current_status(&self) -> &str {
        self.post
            .as_ref()
            .map(|p| p.status.as_str())
            .unwrap_or("draft")
    }
}

/// Renders the empty post editor.
///
/// # Endpoint
///
/// `GET /add_post` (authenticated)
pub async fn add_post_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let categories = state.taxonomy.list_categories().await?;
    let tags = state.taxonomy.list_tags().await?;

    let flashes = flash::take(&headers);
    let had_flashes = !flashes.is_empty();

    let template = PostFormTemplate {
        title: "Add post".to_string(),
        menu: MENU,
        flashes,
        categories,
        tags,
        post: None,
        action: "/add_post".to_string(),
    };

    Ok(flash::rendered_with_clear(template, had_flashes))
}

/// Renders the post editor pre-filled with an existing post.
///
/// # Endpoint
///
/// `GET /update_post/{slug}` (authenticated)
///
/// # Errors
///
/// Returns `404 Not Found` if no post matches the slug.
pub async fn update_post_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let post = state.posts.get_by_slug(&slug).await?;
    let categories = state.taxonomy.list_categories().await?;
    let tags = state.taxonomy.list_tags().await?;

    let flashes = flash::take(&headers);
    let had_flashes = !flashes.is_empty();

    let template = PostFormTemplate {
        title: format!("Edit: {}", post.title),
        menu: MENU,
        flashes,
        categories,
        tags,
        action: format!("/update_post/{slug}"),
        post: Some(post),
    };

    Ok(flash::rendered_with_clear(template, had_flashes))
}

fn validation_failure(errors: &validator::ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(MutationResponse::failure(
            "Validation failed",
            field_errors_json(errors),
        )),
    )
        .into_response()
}

/// Creates a post from the editor's JSON payload.
///
/// # Endpoint
///
/// `POST /add_post` (authenticated)
///
/// # Response
///
/// - `200 OK` with `{"success": true, "message": ..., "redirect_url": "/"}`
/// - `400 Bad Request` with `{"success": false, "message": ..., "errors": {field: [messages]}}`
///
/// The slug is derived from the title, with a numeric suffix on collision.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(form): Json<PostForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(validation_failure(&errors));
    }

    match state.posts.create_post(form.into_input(), user.id).await {
        Ok(_) => Ok(Json(MutationResponse::success("Post added successfully.", "/")).into_response()),
        Err(AppError::Validation { message, details }) => Ok((
            StatusCode::BAD_REQUEST,
            Json(MutationResponse::failure(message, details)),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

/// Updates a post from the editor's JSON payload.
///
/// # Endpoint
///
/// `POST /update_post/{slug}` (authenticated)
///
/// The slug stays stable across updates; the success redirect points back
/// at the post's detail page. Validation failures, including unknown
/// category or tag ids, come back as the `400` mutation envelope.
///
/// # Errors
///
/// Returns `404 Not Found` if no post matches the slug.
pub async fn update_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(form): Json<PostForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(validation_failure(&errors));
    }

    match state.posts.update_post(&slug, form.into_input()).await {
        Ok(post) => Ok(Json(MutationResponse::success(
            "Post updated successfully.",
            format!("/{}/view", post.slug),
        ))
        .into_response()),
        Err(AppError::Validation { message, details }) => Ok((
            StatusCode::BAD_REQUEST,
            Json(MutationResponse::failure(message, details)),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}
