//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for user accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, username: &str) -> Result<User, AppError> {
        let row: UserRow = sqlx::query_as(
            "INSERT INTO users (username) VALUES ($1) RETURNING id, username, created_at",
        )
        .bind(username)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, username, created_at FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT id, username, created_at FROM users ORDER BY created_at")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
