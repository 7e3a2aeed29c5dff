//! User entity: authors of posts and comments.
//!
//! Identity management itself (registration, passwords) lives outside this
//! application; users are provisioned through the admin CLI and referenced
//! by session tokens.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
