//! Anonymous visitor session middleware.

use axum::{
    extract::Request,
    http::header::SET_COOKIE,
    middleware::Next,
    response::Response,
};

use crate::utils::token::generate_visitor_id;
use crate::web::cookies::{VISITOR_COOKIE, get_cookie};

/// The visitor's session id, injected as a request extension.
///
/// Keys the per-session view flags in the session store. Anonymous and
/// authenticated visitors alike get one.
#[derive(Debug, Clone)]
pub struct VisitorId(pub String);

/// Ensures every request carries a visitor session id.
///
/// Reads the `sid` cookie, generating a fresh id when the cookie is missing
/// or empty, and sets the cookie on the response for new visitors.
pub async fn layer(mut req: Request, next: Next) -> Response {
    let existing = get_cookie(req.headers(), VISITOR_COOKIE).filter(|v| !v.is_empty());

    let (sid, is_new) = match existing {
        Some(sid) => (sid, false),
        None => (generate_visitor_id(), true),
    };

    req.extensions_mut().insert(VisitorId(sid.clone()));

    let mut response = next.run(req).await;

    if is_new {
        let cookie = format!("{VISITOR_COOKIE}={sid}; Path=/; HttpOnly; SameSite=Lax");
        response.headers_mut().append(
            SET_COOKIE,
            cookie.parse().expect("visitor id is a valid header value"),
        );
    }

    response
}
