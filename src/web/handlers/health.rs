//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::web::dto::health::{CheckStatus, HealthChecks, HealthResponse};

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Runs a trivial query
/// 2. **Session store**: Backend-specific check (Redis PING, or always
///    healthy for the in-memory store)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "session_store": { "status": "ok", "message": "Available" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let session_check = check_session_store(&state).await;

    let all_healthy = db_check.status == "ok" && session_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            session_store: session_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity with a trivial query.
async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Connected".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

/// Checks session store availability.
async fn check_session_store(state: &AppState) -> CheckStatus {
    if state.sessions.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Available".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Session store unavailable".to_string()),
        }
    }
}
