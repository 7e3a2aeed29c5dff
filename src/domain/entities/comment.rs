//! Comment entity with moderation status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation status gating public display of a comment.
///
/// New comments always start `unchecked`; transitions happen through an
/// external moderation actor, not through this application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "comment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Unchecked,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author: String,
    pub body: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Moderation gate: a comment is publicly visible iff it was accepted.
    pub fn is_visible(&self) -> bool {
        self.status == CommentStatus::Accepted
    }
}

/// Input data for submitting a comment. The repository stores it `unchecked`.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub author_id: i64,
    pub body: String,
}
