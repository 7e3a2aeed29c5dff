//! Cookie-based authentication middleware for author routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::User;
use crate::state::AppState;
use crate::web::cookies::{SESSION_COOKIE, get_cookie};
use crate::web::flash::{Flash, redirect_with_flash};

/// The authenticated author, injected as a request extension.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates author requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session_token=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the `session_token` cookie from the request
/// 2. Validate the token via [`crate::application::services::AuthService`]
/// 3. On success, insert [`CurrentUser`] and continue to the handler
/// 4. On failure or missing token, redirect to `/login` with a flash message
///
/// Redirecting (rather than returning `401 Unauthorized`) keeps the flow
/// usable from a browser, which is the only client of these routes.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = get_cookie(req.headers(), SESSION_COOKIE);

    match token {
        Some(token) => match st.auth.authenticate(&token).await {
            Ok(user) => {
                req.extensions_mut().insert(CurrentUser(user));
                Ok(next.run(req).await)
            }
            Err(_) => Err(redirect_with_flash(
                "/login",
                Flash::error("Please log in to continue."),
            )),
        },
        None => Err(redirect_with_flash(
            "/login",
            Flash::error("Please log in to continue."),
        )),
    }
}
