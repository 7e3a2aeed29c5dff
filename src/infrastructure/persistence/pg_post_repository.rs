//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostFilter, PostPatch, PostStatus, Tag};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

const SELECT_POSTS: &str = "\
SELECT p.id, p.title, p.slug, p.body, p.status, p.views, p.created_at, \
       p.author_id, u.username AS author, \
       c.name AS category_name, c.slug AS category_slug \
FROM posts p \
JOIN users u ON u.id = p.author_id \
LEFT JOIN categories c ON c.id = p.category_id";

const COUNT_POSTS: &str = "\
SELECT COUNT(*) \
FROM posts p \
LEFT JOIN categories c ON c.id = p.category_id";

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    status: PostStatus,
    views: i64,
    created_at: DateTime<Utc>,
    author_id: i64,
    author: String,
    category_name: Option<String>,
    category_slug: Option<String>,
}

impl PostRow {
    fn into_post(self, tags: Vec<Tag>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            slug: self.slug,
            body: self.body,
            status: self.status,
            views: self.views,
            created_at: self.created_at,
            author_id: self.author_id,
            author: self.author,
            category_name: self.category_name,
            category_slug: self.category_slug,
            tags,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TagLinkRow {
    post_id: i64,
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for post storage and retrieval.
///
/// Search uses `ILIKE` matching over the post itself plus `EXISTS`
/// subqueries for tag and comment text, which keeps result sets
/// de-duplicated without `DISTINCT`.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads tag lists for a batch of posts with a single query.
    async fn load_tags(&self, post_ids: &[i64]) -> Result<HashMap<i64, Vec<Tag>>, AppError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<TagLinkRow> = sqlx::query_as(
            "SELECT pt.post_id, t.id, t.name, t.slug, t.created_at \
             FROM post_tags pt \
             JOIN tags t ON t.id = pt.tag_id \
             WHERE pt.post_id = ANY($1) \
             ORDER BY t.name",
        )
        .bind(post_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut map: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            map.entry(row.post_id).or_default().push(Tag {
                id: row.id,
                name: row.name,
                slug: row.slug,
                created_at: row.created_at,
            });
        }

        Ok(map)
    }

    async fn rows_into_posts(&self, rows: Vec<PostRow>) -> Result<Vec<Post>, AppError> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut tags = self.load_tags(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let post_tags = tags.remove(&row.id).unwrap_or_default();
                row.into_post(post_tags)
            })
            .collect())
    }
}

/// Appends the filter conditions shared by `search` and `count`.
///
/// Assumes the query already contains a `WHERE` clause.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
    if let Some(slug) = &filter.category_slug {
        qb.push(" AND c.slug = ").push_bind(slug.clone());
    }

    if let Some(slug) = &filter.tag_slug {
        qb.push(
            " AND EXISTS (SELECT 1 FROM post_tags pt \
             JOIN tags t ON t.id = pt.tag_id \
             WHERE pt.post_id = p.id AND t.slug = ",
        )
        .push_bind(slug.clone())
        .push(")");
    }

    if let Some(query) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
        let pattern = format!("%{}%", escape_like(query));

        qb.push(" AND (p.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.body ILIKE ")
            .push_bind(pattern.clone());

        if filter.in_categories {
            qb.push(" OR c.name ILIKE ").push_bind(pattern.clone());
        }

        if filter.in_tags {
            qb.push(
                " OR EXISTS (SELECT 1 FROM post_tags pt \
                 JOIN tags t ON t.id = pt.tag_id \
                 WHERE pt.post_id = p.id AND t.name ILIKE ",
            )
            .push_bind(pattern.clone())
            .push(")");
        }

        if filter.in_comments {
            qb.push(
                " OR EXISTS (SELECT 1 FROM comments cm \
                 WHERE cm.post_id = p.id AND cm.body ILIKE ",
            )
            .push_bind(pattern.clone())
            .push(")");
        }

        qb.push(")");
    }
}

/// Escapes `ILIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let mut tx = self.pool.begin().await?;

        let post_id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (title, slug, body, status, author_id, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&new_post.title)
        .bind(&new_post.slug)
        .bind(&new_post.body)
        .bind(new_post.status)
        .bind(new_post.author_id)
        .bind(new_post.category_id)
        .fetch_one(&mut *tx)
        .await?;

        if !new_post.tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO post_tags (post_id, tag_id) \
                 SELECT $1, tag_id FROM UNNEST($2::bigint[]) AS tag_id",
            )
            .bind(post_id)
            .bind(&new_post.tag_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_by_slug(&new_post.slug).await?.ok_or_else(|| {
            AppError::internal("Created post vanished", json!({ "slug": new_post.slug }))
        })
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError> {
        let mut tx = self.pool.begin().await?;

        let slug: Option<String> = sqlx::query_scalar(
            "UPDATE posts \
             SET title = $2, body = $3, status = $4, category_id = $5 \
             WHERE id = $1 \
             RETURNING slug",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.body)
        .bind(patch.status)
        .bind(patch.category_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(slug) = slug else {
            return Err(AppError::not_found("Post not found", json!({ "id": id })));
        };

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if !patch.tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO post_tags (post_id, tag_id) \
                 SELECT $1, tag_id FROM UNNEST($2::bigint[]) AS tag_id",
            )
            .bind(id)
            .bind(&patch.tag_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::internal("Updated post vanished", json!({ "id": id })))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        let row: Option<PostRow> =
            sqlx::query_as(&format!("{SELECT_POSTS} WHERE p.slug = $1"))
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        let Some(row) = row else { return Ok(None) };

        let mut tags = self.load_tags(&[row.id]).await?;
        let post_tags = tags.remove(&row.id).unwrap_or_default();

        Ok(Some(row.into_post(post_tags)))
    }

    async fn search(
        &self,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, AppError> {
        let mut qb = QueryBuilder::new(SELECT_POSTS);
        qb.push(" WHERE p.status = 'published'");
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows: Vec<PostRow> = qb
            .build_query_as()
            .fetch_all(self.pool.as_ref())
            .await?;

        self.rows_into_posts(rows).await
    }

    async fn count(&self, filter: &PostFilter) -> Result<i64, AppError> {
        let mut qb = QueryBuilder::new(COUNT_POSTS);
        qb.push(" WHERE p.status = 'published'");
        push_filter(&mut qb, filter);

        let count: i64 = qb
            .build_query_scalar()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn increment_views(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE posts SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
