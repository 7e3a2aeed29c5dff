//! Category entity: a post belongs to at most one category.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}
