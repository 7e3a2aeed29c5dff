//! Category and tag management form pages and handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::NameForm;
use crate::web::flash::{self, Flash, redirect_with_flash};
use crate::web::menu::{MENU, MenuItem};

/// Template for the single-field name forms used by category and tag
/// management.
///
/// Renders `templates/name_form.html`.
#[derive(Template, WebTemplate)]
#[template(path = "name_form.html")]
pub struct NameFormTemplate {
    pub title: String,
    pub menu: &'static [MenuItem],
    pub flashes: Vec<Flash>,
    /// Where the form posts.
    pub action: String,
    /// Pre-filled name when renaming.
    pub name: String,
}

fn render_name_form(title: String, action: String, name: String, headers: &HeaderMap) -> Response {
    let flashes = flash::take(headers);
    let had_flashes = !flashes.is_empty();

    let template = NameFormTemplate {
        title,
        menu: MENU,
        flashes,
        action,
        name,
    };

    flash::rendered_with_clear(template, had_flashes)
}

/// Renders the category creation form.
///
/// # Endpoint
///
/// `GET /add_category` (authenticated)
pub async fn add_category_page_handler(headers: HeaderMap) -> Response {
    render_name_form(
        "Add category".to_string(),
        "/add_category".to_string(),
        String::new(),
        &headers,
    )
}

/// Creates a category.
///
/// # Endpoint
///
/// `POST /add_category` with form field `name` (authenticated)
///
/// The slug is derived from the name; a taken slug is a conflict. Both
/// validation and conflict failures come back as a flash on the form page.
pub async fn create_category_handler(
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> Result<Response, AppError> {
    if form.validate().is_err() {
        return Ok(redirect_with_flash(
            "/add_category",
            Flash::error("Name must be 1 to 100 characters."),
        ));
    }

    match state.taxonomy.create_category(&form.name).await {
        Ok(category) => Ok(redirect_with_flash(
            &format!("/category/{}", category.slug),
            Flash::success("Category added successfully."),
        )),
        Err(AppError::Conflict { message, .. } | AppError::Validation { message, .. }) => {
            Ok(redirect_with_flash("/add_category", Flash::error(message)))
        }
        Err(e) => Err(e),
    }
}

/// Renders the category rename form.
///
/// # Endpoint
///
/// `GET /update_category/{slug}` (authenticated)
///
/// # Errors
///
/// Returns `404 Not Found` if the category does not exist.
pub async fn update_category_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let category = state.taxonomy.get_category(&slug).await?;

    Ok(render_name_form(
        format!("Rename category: {}", category.name),
        format!("/update_category/{slug}"),
        category.name,
        &headers,
    ))
}

/// Renames a category. The slug stays stable so links keep working.
///
/// # Endpoint
///
/// `POST /update_category/{slug}` with form field `name` (authenticated)
pub async fn update_category_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<NameForm>,
) -> Result<Response, AppError> {
    let back = format!("/update_category/{slug}");

    if form.validate().is_err() {
        return Ok(redirect_with_flash(
            &back,
            Flash::error("Name must be 1 to 100 characters."),
        ));
    }

    let category = state.taxonomy.update_category(&slug, &form.name).await?;

    Ok(redirect_with_flash(
        &format!("/category/{}", category.slug),
        Flash::success("Category updated successfully."),
    ))
}

/// Renders the tag creation form.
///
/// # Endpoint
///
/// `GET /add_tag` (authenticated)
pub async fn add_tag_page_handler(headers: HeaderMap) -> Response {
    render_name_form(
        "Add tag".to_string(),
        "/add_tag".to_string(),
        String::new(),
        &headers,
    )
}

/// Creates a tag.
///
/// # Endpoint
///
/// `POST /add_tag` with form field `name` (authenticated)
pub async fn create_tag_handler(
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> Result<Response, AppError> {
    if form.validate().is_err() {
        return Ok(redirect_with_flash(
            "/add_tag",
            Flash::error("Name must be 1 to 100 characters."),
        ));
    }

    match state.taxonomy.create_tag(&form.name).await {
        Ok(tag) => Ok(redirect_with_flash(
            &format!("/tag/{}", tag.slug),
            Flash::success("Tag added successfully."),
        )),
        Err(AppError::Conflict { message, .. } | AppError::Validation { message, .. }) => {
            Ok(redirect_with_flash("/add_tag", Flash::error(message)))
        }
        Err(e) => Err(e),
    }
}
