//! PostgreSQL implementation of the session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for session token hashes.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO sessions (user_id, token_hash) VALUES ($1, $2)")
            .bind(user_id)
            .bind(token_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_user(&self, token_hash: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT u.id, u.username, u.created_at \
             FROM sessions s \
             JOIN users u ON u.id = s.user_id \
             WHERE s.token_hash = $1 AND NOT s.revoked",
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| User {
            id: r.id,
            username: r.username,
            created_at: r.created_at,
        }))
    }

    async fn touch(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE sessions SET last_used_at = NOW() WHERE token_hash = $1")
            .bind(token_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE sessions SET revoked = TRUE WHERE token_hash = $1 AND NOT revoked")
                .bind(token_hash)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
