//! One-shot flash messages carried in a cookie across redirects.
//!
//! Messages are serialized to JSON, base64-encoded into the `flash` cookie
//! on the redirect response, and consumed (read + cleared) by the next
//! rendered page.

use axum::http::{HeaderMap, HeaderValue, header::SET_COOKIE};
use axum::response::{IntoResponse, Redirect, Response};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::web::cookies::get_cookie;

const FLASH_COOKIE: &str = "flash";

/// Severity of a flash message, mapped to styling in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// A message shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == FlashLevel::Error
    }
}

/// Encodes flash messages into a `Set-Cookie` header value.
pub fn set_cookie_value(flashes: &[Flash]) -> HeaderValue {
    let json = serde_json::to_string(flashes).unwrap_or_else(|_| "[]".to_string());
    let encoded = URL_SAFE_NO_PAD.encode(json);

    HeaderValue::from_str(&format!(
        "{FLASH_COOKIE}={encoded}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .expect("base64 payload is a valid header value")
}

/// `Set-Cookie` header value that clears the flash cookie.
pub fn clear_cookie_value() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Reads pending flash messages from the request headers.
///
/// Undecodable cookies are treated as empty. The caller is responsible for
/// clearing the cookie on the response via [`clear_cookie_value`].
pub fn take(headers: &HeaderMap) -> Vec<Flash> {
    let Some(raw) = get_cookie(headers, FLASH_COOKIE) else {
        return Vec::new();
    };

    URL_SAFE_NO_PAD
        .decode(raw.as_bytes())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

/// Finalizes a rendered page, clearing the flash cookie when messages
/// were consumed into the template.
pub fn rendered_with_clear(page: impl IntoResponse, had_flashes: bool) -> Response {
    let mut response = page.into_response();
    if had_flashes {
        response
            .headers_mut()
            .append(SET_COOKIE, clear_cookie_value());
    }
    response
}

/// Redirects to `to`, carrying a flash message for the target page.
pub fn redirect_with_flash(to: &str, flash: Flash) -> Response {
    let mut response = Redirect::to(to).into_response();
    response
        .headers_mut()
        .append(SET_COOKIE, set_cookie_value(&[flash]));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    fn headers_from_set_cookie(value: &HeaderValue) -> HeaderMap {
        // Re-present the Set-Cookie pair as a request Cookie header.
        let pair = value
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(&pair).unwrap());
        headers
    }

    #[test]
    fn test_round_trip() {
        let flashes = vec![
            Flash::success("Post added successfully."),
            Flash::error("Something went wrong."),
        ];

        let headers = headers_from_set_cookie(&set_cookie_value(&flashes));
        assert_eq!(take(&headers), flashes);
    }

    #[test]
    fn test_missing_cookie_is_empty() {
        assert!(take(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_garbage_cookie_is_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("flash=not-base64!!"));
        assert!(take(&headers).is_empty());
    }

    #[test]
    fn test_redirect_carries_cookie() {
        let response = redirect_with_flash("/", Flash::success("Done."));
        assert!(response.status().is_redirection());
        assert!(response.headers().contains_key(SET_COOKIE));
    }
}
