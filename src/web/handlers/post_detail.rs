//! Post detail page and comment submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use validator::Validate;

use crate::domain::entities::{Comment, Post};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::markdown::render_markdown;
use crate::utils::paginate::Page;
use crate::web::cookies::{SESSION_COOKIE, get_cookie};
use crate::web::dto::{CommentForm, PageQuery};
use crate::web::flash::{self, Flash, redirect_with_flash};
use crate::web::menu::{MENU, MenuItem};
use crate::web::middleware::visitor_session::VisitorId;

/// Template for the post detail page.
///
/// Renders `templates/post_detail.html` with:
/// - The post with its body rendered from markdown
/// - One page of accepted comments, oldest first
/// - The comment submission form
#[derive(Template, WebTemplate)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate {
    pub title: String,
    pub menu: &'static [MenuItem],
    pub flashes: Vec<Flash>,
    pub post: Post,
    pub body_html: String,
    pub comments: Page<Comment>,
}

/// Renders a single post with its accepted comments.
///
/// # Endpoint
///
/// `GET /{slug}/view?page=N`
///
/// # View Counting
///
/// The view counter increments at most once per visitor session: the
/// session store keeps an advisory "already viewed" flag, and only a first
/// view triggers the atomic counter increment. A session store failure
/// means the flag is absent and the view counts again, never the reverse.
///
/// # Errors
///
/// Returns `404 Not Found` if no post matches the slug. Drafts stay
/// reachable by direct URL; only listings filter them out.
pub async fn show_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
    Extension(VisitorId(sid)): Extension<VisitorId>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let mut post = state.posts.get_by_slug(&slug).await?;

    let viewed = state
        .sessions
        .was_viewed(&sid, post.id)
        .await
        .unwrap_or(false);

    if !viewed {
        state.posts.record_view(post.id).await?;
        let _ = state.sessions.mark_viewed(&sid, post.id).await;
        // Reflect the increment without a second fetch.
        post.views += 1;
    }

    let comments = state
        .comments
        .list_for_post(post.id, query.page.as_deref())
        .await?;

    let flashes = flash::take(&headers);
    let had_flashes = !flashes.is_empty();

    let template = PostDetailTemplate {
        title: post.title.clone(),
        menu: MENU,
        flashes,
        body_html: render_markdown(&post.body),
        post,
        comments,
    };

    Ok(flash::rendered_with_clear(template, had_flashes))
}

/// Accepts a comment submission on a post.
///
/// # Endpoint
///
/// `POST /{slug}/view` with form field `body`
///
/// # Authentication
///
/// Requires a valid session cookie. Anonymous visitors are redirected to
/// `/login` instead of receiving a bare `401`, since this endpoint is only
/// reached from the browser form.
///
/// # Moderation
///
/// Accepted submissions are stored in the `unchecked` state and become
/// visible only once moderation accepts them; the redirect flash says so.
pub async fn submit_comment_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let user = match get_cookie(&headers, SESSION_COOKIE) {
        Some(token) => match state.auth.authenticate(&token).await {
            Ok(user) => user,
            Err(_) => {
                return Ok(redirect_with_flash(
                    "/login",
                    Flash::error("Please log in to comment."),
                ));
            }
        },
        None => {
            return Ok(redirect_with_flash(
                "/login",
                Flash::error("Please log in to comment."),
            ));
        }
    };

    let back = format!("/{slug}/view");

    if form.validate().is_err() {
        return Ok(redirect_with_flash(
            &back,
            Flash::error("Comment must be 1 to 2000 characters."),
        ));
    }

    state.comments.submit(&slug, user.id, form.body).await?;

    Ok(redirect_with_flash(
        &back,
        Flash::success("Comment submitted and awaiting moderation."),
    ))
}
