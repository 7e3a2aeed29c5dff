mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use minipress::web::handlers::health_handler;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_reports_components(pool: PgPool) {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state(pool));

    let server = TestServer::new(app).unwrap();
    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["session_store"]["status"], "ok");
    assert!(body["version"].is_string());
}
