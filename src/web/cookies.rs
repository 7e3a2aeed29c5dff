//! Cookie header parsing helpers.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Cookie holding the author session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Cookie holding the anonymous visitor id.
pub const VISITOR_COOKIE: &str = "sid";

/// Extracts a named cookie value from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and matching the
/// key-value pair; other cookies are ignored.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) if key == name => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}
