//! Tag entity: posts carry zero or more tags.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a tag.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
}
