use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    /// Converts the error into its serializable payload, discarding the status code.
    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(%message, ?details, "Internal error");
        }

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }

            if db.is_foreign_key_violation() {
                let field = db.constraint().map(fk_field).unwrap_or("id");
                return AppError::bad_request(
                    "Validation failed",
                    json!({ field: ["Referenced record does not exist"] }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

/// Maps a foreign key constraint name to the request field it came from.
///
/// Constraint names follow the `{table}_{column}_fkey` convention; the
/// column identifies the offending field. `tag_id` maps to the `tag_ids`
/// array the post form submits.
fn fk_field(constraint: &str) -> &'static str {
    if constraint.contains("category_id") {
        "category_id"
    } else if constraint.contains("tag_id") {
        "tag_ids"
    } else if constraint.contains("post_id") {
        "post_id"
    } else if constraint.contains("author_id") || constraint.contains("user_id") {
        "author_id"
    } else {
        "id"
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", field_errors_json(&errors))
    }
}

/// Flattens `validator` errors into a `{field: [messages]}` JSON map.
pub fn field_errors_json(errors: &validator::ValidationErrors) -> Value {
    let map: serde_json::Map<String, Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<Value> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_deref()
                        .map(|m| json!(m))
                        .unwrap_or_else(|| json!(e.code))
                })
                .collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect();

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "Too short"))]
        name: String,
    }

    #[test]
    fn test_field_errors_are_keyed_by_field() {
        let sample = Sample {
            name: "ab".to_string(),
        };
        let errors = sample.validate().unwrap_err();
        let details = field_errors_json(&errors);

        assert_eq!(details["name"][0], "Too short");
    }

    #[test]
    fn test_validation_errors_map_to_validation_variant() {
        let sample = Sample {
            name: String::new(),
        };
        let err: AppError = sample.validate().unwrap_err().into();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_fk_field_maps_constraints() {
        assert_eq!(fk_field("posts_category_id_fkey"), "category_id");
        assert_eq!(fk_field("post_tags_tag_id_fkey"), "tag_ids");
        assert_eq!(fk_field("comments_post_id_fkey"), "post_id");
        assert_eq!(fk_field("sessions_user_id_fkey"), "author_id");
        assert_eq!(fk_field("something_else"), "id");
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::not_found("gone", json!({})).to_error_info();
        assert_eq!(info.code, "not_found");

        let info = AppError::unauthorized("nope", json!({})).to_error_info();
        assert_eq!(info.code, "unauthorized");
    }
}
