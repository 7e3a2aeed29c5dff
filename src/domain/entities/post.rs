//! Post entity and its mutation/query types.

use crate::domain::entities::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status gating public listing visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    /// Parses a status string as submitted by the post form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }
}

/// A blog post with joined author, category, and tag data.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub status: PostStatus,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author: String,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub tags: Vec<Tag>,
}

impl Post {
    /// Moderation gate: a post is publicly listed iff it is published.
    pub fn is_public(&self) -> bool {
        self.status == PostStatus::Published
    }
}

/// Input data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub status: PostStatus,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

/// Full-field update for an existing post.
///
/// The slug is deliberately absent: it is derived once at creation and stays
/// stable afterwards so published URLs never break.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub body: String,
    pub status: PostStatus,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

/// Query filter for post listings.
///
/// `query` matches title and body; the boolean flags widen the match to
/// category names, tag names, and comment text. `category_slug` / `tag_slug`
/// restrict the listing to a single category or tag.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub query: Option<String>,
    pub in_categories: bool,
    pub in_tags: bool,
    pub in_comments: bool,
    pub category_slug: Option<String>,
    pub tag_slug: Option<String>,
}

impl PostFilter {
    pub fn for_category(slug: &str) -> Self {
        Self {
            category_slug: Some(slug.to_string()),
            ..Self::default()
        }
    }

    pub fn for_tag(slug: &str) -> Self {
        Self {
            tag_slug: Some(slug.to_string()),
            ..Self::default()
        }
    }
}
