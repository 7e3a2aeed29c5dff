//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                    - Post listing with search (public)
//! - `GET  /{slug}/view`         - Post detail (public, counts views)
//! - `GET  /health`              - Health check: DB, session store (public)
//! - `POST /preview`             - Markdown preview (public)
//! - `/add_post`, `/update_post/{slug}`, taxonomy forms
//!   - Author endpoints (session cookie required)
//! - `/static/*`                 - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Visitor sessions** - `sid` cookie for per-session view counting
//! - **Authentication** - Session cookie on author routes
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{rate_limit, tracing, visitor_session, web_auth};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::secure_layer(behind_proxy));

    let public = web::routes::public_routes().layer(rate_limit::layer(behind_proxy));

    let router = Router::new()
        .merge(protected)
        .merge(public)
        .layer(middleware::from_fn(visitor_session::layer))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
