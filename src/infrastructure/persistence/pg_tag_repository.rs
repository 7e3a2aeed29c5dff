//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTag, Tag};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: row.id,
            name: row.name,
            slug: row.slug,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for tags.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError> {
        let row: TagRow = sqlx::query_as(
            "INSERT INTO tags (name, slug) VALUES ($1, $2) \
             RETURNING id, name, slug, created_at",
        )
        .bind(&new_tag.name)
        .bind(&new_tag.slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError> {
        let row: Option<TagRow> =
            sqlx::query_as("SELECT id, name, slug, created_at FROM tags WHERE slug = $1")
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let rows: Vec<TagRow> =
            sqlx::query_as("SELECT id, name, slug, created_at FROM tags ORDER BY name")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
