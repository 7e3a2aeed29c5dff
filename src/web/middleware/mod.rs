//! Middleware for the web layer.

pub mod rate_limit;
pub mod tracing;
pub mod visitor_session;
pub mod web_auth;
