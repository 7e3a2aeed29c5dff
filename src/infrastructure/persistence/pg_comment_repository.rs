//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Comment, CommentStatus, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: i64,
    author: String,
    body: String,
    status: CommentStatus,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            post_id: row.post_id,
            author_id: row.author_id,
            author: row.author,
            body: row.body,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for comment storage and moderated listing.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row: CommentRow = sqlx::query_as(
            "WITH inserted AS ( \
                INSERT INTO comments (post_id, author_id, body, status) \
                VALUES ($1, $2, $3, 'unchecked') \
                RETURNING id, post_id, author_id, body, status, created_at \
             ) \
             SELECT i.id, i.post_id, i.author_id, u.username AS author, \
                    i.body, i.status, i.created_at \
             FROM inserted i \
             JOIN users u ON u.id = i.author_id",
        )
        .bind(new_comment.post_id)
        .bind(new_comment.author_id)
        .bind(&new_comment.body)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_accepted(
        &self,
        post_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>, AppError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            "SELECT cm.id, cm.post_id, cm.author_id, u.username AS author, \
                    cm.body, cm.status, cm.created_at \
             FROM comments cm \
             JOIN users u ON u.id = cm.author_id \
             WHERE cm.post_id = $1 AND cm.status = 'accepted' \
             ORDER BY cm.created_at ASC, cm.id ASC \
             LIMIT $2 OFFSET $3",
        )
        .bind(post_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_accepted(&self, post_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE post_id = $1 AND status = 'accepted'",
        )
        .bind(post_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
