mod common;

use minipress::domain::entities::{NewPost, PostFilter, PostStatus};
use minipress::domain::repositories::PostRepository;
use minipress::infrastructure::persistence::PgPostRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_attaches_category_and_tags(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    let category = common::create_test_category(&pool, "Rust", "rust").await;
    let tag = common::create_test_tag(&pool, "axum", "axum").await;

    let repo = PgPostRepository::new(Arc::new(pool));

    let post = repo
        .create(NewPost {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            body: "Body".to_string(),
            status: PostStatus::Published,
            author_id: author,
            category_id: Some(category),
            tag_ids: vec![tag],
        })
        .await
        .unwrap();

    assert_eq!(post.author, "alice");
    assert_eq!(post.category_name.as_deref(), Some("Rust"));
    assert_eq!(post.tags.len(), 1);
    assert_eq!(post.tags[0].slug, "axum");
}

#[sqlx::test]
async fn test_search_returns_published_newest_first(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    common::create_test_post(&pool, "First", "first", "published", author).await;
    common::create_test_post(&pool, "Second", "second", "published", author).await;
    common::create_test_post(&pool, "Draft", "draft-post", "draft", author).await;

    let repo = PgPostRepository::new(Arc::new(pool));
    let filter = PostFilter::default();

    let posts = repo.search(&filter, 10, 0).await.unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();

    assert_eq!(slugs, vec!["second", "first"]);
    assert_eq!(repo.count(&filter).await.unwrap(), 2);
}

#[sqlx::test]
async fn test_search_escapes_like_wildcards(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    common::create_test_post(&pool, "100% honest review", "honest-review", "published", author)
        .await;
    common::create_test_post(&pool, "Unrelated", "unrelated", "published", author).await;

    let repo = PgPostRepository::new(Arc::new(pool));

    // A literal percent sign must not act as a wildcard.
    let filter = PostFilter {
        query: Some("100%".to_string()),
        ..Default::default()
    };
    let posts = repo.search(&filter, 10, 0).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "honest-review");

    let miss = PostFilter {
        query: Some("%".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.count(&miss).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_search_widens_to_tags_with_flag(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    let tag = common::create_test_tag(&pool, "ferris", "ferris").await;
    let tagged = common::create_test_post(&pool, "Plain Title", "plain-title", "published", author).await;
    common::attach_tag(&pool, tagged, tag).await;

    let repo = PgPostRepository::new(Arc::new(pool));

    let narrow = PostFilter {
        query: Some("ferris".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.count(&narrow).await.unwrap(), 0);

    let wide = PostFilter {
        query: Some("ferris".to_string()),
        in_tags: true,
        ..Default::default()
    };
    assert_eq!(repo.count(&wide).await.unwrap(), 1);
}

#[sqlx::test]
async fn test_matching_post_appears_once(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    let post_id = common::create_test_post(
        &pool,
        "Popular Post",
        "popular-post",
        "published",
        author,
    )
    .await;
    // Several accepted comments matching the query must not duplicate the post.
    common::create_test_comment(&pool, post_id, author, "popular indeed", "accepted").await;
    common::create_test_comment(&pool, post_id, author, "very popular", "accepted").await;

    let repo = PgPostRepository::new(Arc::new(pool));

    let filter = PostFilter {
        query: Some("popular".to_string()),
        in_comments: true,
        ..Default::default()
    };

    assert_eq!(repo.count(&filter).await.unwrap(), 1);
    assert_eq!(repo.search(&filter, 10, 0).await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_increment_views_accumulates(pool: PgPool) {
    let author = common::create_test_user(&pool, "alice").await;
    let post_id = common::create_test_post(&pool, "A Post", "a-post", "published", author).await;

    let repo = PgPostRepository::new(Arc::new(pool.clone()));

    repo.increment_views(post_id).await.unwrap();
    repo.increment_views(post_id).await.unwrap();

    assert_eq!(common::post_views(&pool, post_id).await, 2);
}

#[sqlx::test]
async fn test_find_by_slug_misses_cleanly(pool: PgPool) {
    let repo = PgPostRepository::new(Arc::new(pool));
    assert!(repo.find_by_slug("nothing-here").await.unwrap().is_none());
}
