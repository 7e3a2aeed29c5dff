//! PostgreSQL implementation of the category repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            slug: row.slug,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for categories.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

impl PgCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let row: CategoryRow = sqlx::query_as(
            "INSERT INTO categories (name, slug) VALUES ($1, $2) \
             RETURNING id, name, slug, created_at",
        )
        .bind(&new_category.name)
        .bind(&new_category.slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update_name(&self, slug: &str, name: &str) -> Result<Category, AppError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "UPDATE categories SET name = $2 WHERE slug = $1 \
             RETURNING id, name, slug, created_at",
        )
        .bind(slug)
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Category not found", json!({ "slug": slug })))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "SELECT id, name, slug, created_at FROM categories WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, name, slug, created_at FROM categories ORDER BY name")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
