mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use minipress::web::handlers::{category_handler, index_handler, tag_handler};
use sqlx::PgPool;

fn listing_app(state: minipress::AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/category/{slug}", get(category_handler))
        .route("/tag/{slug}", get(tag_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_index_lists_only_published_posts(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    common::create_test_post(&pool, "Public Post", "public-post", "published", author).await;
    common::create_test_post(&pool, "Secret Draft", "secret-draft", "draft", author).await;

    let server = listing_app(common::create_test_state(pool));
    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Public Post"));
    assert!(!html.contains("Secret Draft"));
}

#[sqlx::test]
async fn test_index_paginates_four_per_page(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    for i in 1..=5 {
        common::create_test_post(
            &pool,
            &format!("Post Number {i}"),
            &format!("post-number-{i}"),
            "published",
            author,
        )
        .await;
    }

    let server = listing_app(common::create_test_state(pool));

    let first = server.get("/").await.text();
    // Newest first: posts 5 down to 2 on page one.
    assert!(first.contains("Post Number 5"));
    assert!(first.contains("Post Number 2"));
    assert!(!first.contains("Post Number 1<"));
    assert!(first.contains("Page 1 of 2"));

    let second = server.get("/").add_query_param("page", "2").await.text();
    assert!(second.contains("Post Number 1"));
    assert!(second.contains("Page 2 of 2"));
}

#[sqlx::test]
async fn test_out_of_range_page_clamps_to_last(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    for i in 1..=5 {
        common::create_test_post(
            &pool,
            &format!("Post Number {i}"),
            &format!("post-number-{i}"),
            "published",
            author,
        )
        .await;
    }

    let server = listing_app(common::create_test_state(pool));

    let response = server.get("/").add_query_param("page", "999").await;
    response.assert_status_ok();
    assert!(response.text().contains("Page 2 of 2"));
}

#[sqlx::test]
async fn test_non_numeric_page_shows_first(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    common::create_test_post(&pool, "Only Post", "only-post", "published", author).await;

    let server = listing_app(common::create_test_state(pool));

    let response = server.get("/").add_query_param("page", "abc").await;
    response.assert_status_ok();
    assert!(response.text().contains("Page 1 of 1"));
}

#[sqlx::test]
async fn test_search_matches_title(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    common::create_test_post(&pool, "Rust Tricks", "rust-tricks", "published", author).await;
    common::create_test_post(&pool, "Garden Notes", "garden-notes", "published", author).await;

    let server = listing_app(common::create_test_state(pool));

    let html = server.get("/").add_query_param("search", "rust").await.text();
    assert!(html.contains("Rust Tricks"));
    assert!(!html.contains("Garden Notes"));
}

#[sqlx::test]
async fn test_search_widens_to_comments_only_with_flag(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    let post_id =
        common::create_test_post(&pool, "Quiet Title", "quiet-title", "published", author).await;
    common::create_test_comment(&pool, post_id, author, "mentions ferris here", "accepted").await;

    let server = listing_app(common::create_test_state(pool));

    let without_flag = server.get("/").add_query_param("search", "ferris").await.text();
    assert!(!without_flag.contains("Quiet Title"));

    let with_flag = server
        .get("/")
        .add_query_param("search", "ferris")
        .add_query_param("search_comments", "on")
        .await
        .text();
    assert!(with_flag.contains("Quiet Title"));
}

#[sqlx::test]
async fn test_category_page_filters_posts(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    let category = common::create_test_category(&pool, "Rust", "rust").await;

    let in_category =
        common::create_test_post(&pool, "In Category", "in-category", "published", author).await;
    common::set_post_category(&pool, in_category, category).await;
    common::create_test_post(&pool, "Elsewhere", "elsewhere", "published", author).await;

    let server = listing_app(common::create_test_state(pool));

    let response = server.get("/category/rust").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Category: Rust"));
    assert!(html.contains("In Category"));
    assert!(!html.contains("Elsewhere"));
}

#[sqlx::test]
async fn test_unknown_category_is_not_found(pool: PgPool) {
    let server = listing_app(common::create_test_state(pool));

    let response = server.get("/category/missing").await;
    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_tag_page_filters_posts(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    let tag = common::create_test_tag(&pool, "axum", "axum").await;

    let tagged = common::create_test_post(&pool, "Tagged Post", "tagged-post", "published", author).await;
    common::attach_tag(&pool, tagged, tag).await;
    common::create_test_post(&pool, "Untagged Post", "untagged-post", "published", author).await;

    let server = listing_app(common::create_test_state(pool));

    let html = server.get("/tag/axum").await.text();
    assert!(html.contains("Tagged Post"));
    assert!(!html.contains("Untagged Post"));
}
