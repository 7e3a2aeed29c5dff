#![allow(dead_code)]

use minipress::infrastructure::session::MemorySessionStore;
use minipress::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(MemorySessionStore::new()),
        "test-signing-secret".to_string(),
    )
}

pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (username) VALUES ($1) RETURNING id")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Issues a raw session token for a user, as the admin CLI would.
pub async fn create_session_token(state: &AppState, user_id: i64) -> String {
    state.auth.issue_session(user_id).await.unwrap()
}

pub async fn create_test_post(
    pool: &PgPool,
    title: &str,
    slug: &str,
    status: &str,
    author_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, slug, body, status, author_id) \
         VALUES ($1, $2, 'Body text', $3::post_status, $4) RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .bind(status)
    .bind(author_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_post_with_body(
    pool: &PgPool,
    title: &str,
    slug: &str,
    body: &str,
    author_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, slug, body, status, author_id) \
         VALUES ($1, $2, $3, 'published', $4) RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .bind(body)
    .bind(author_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_category(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_tag(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn set_post_category(pool: &PgPool, post_id: i64, category_id: i64) {
    sqlx::query("UPDATE posts SET category_id = $1 WHERE id = $2")
        .bind(category_id)
        .bind(post_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn attach_tag(pool: &PgPool, post_id: i64, tag_id: i64) {
    sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)")
        .bind(post_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_comment(
    pool: &PgPool,
    post_id: i64,
    author_id: i64,
    body: &str,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO comments (post_id, author_id, body, status) \
         VALUES ($1, $2, $3, $4::comment_status) RETURNING id",
    )
    .bind(post_id)
    .bind(author_id)
    .bind(body)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn post_views(pool: &PgPool, post_id: i64) -> i64 {
    sqlx::query_scalar("SELECT views FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
