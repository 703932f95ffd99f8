use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cpms_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the shape `{"message": ...}`. Not-found errors carry an empty body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cpms-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                // Not-found responses carry no body.
                CoreError::NotFound { .. } => {
                    return StatusCode::NOT_FOUND.into_response();
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::BusinessRule(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => match classify_sqlx_error(err) {
                Some(pair) => pair,
                None => return StatusCode::NOT_FOUND.into_response(),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404 (signalled by `None`, empty body).
/// - Unique constraint violations (constraint name starting with `uq_`)
///   map to 409, covering the check-then-insert race on registration.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Option<(StatusCode, String)> {
    match err {
        sqlx::Error::RowNotFound => None,
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    // Same user-facing message as the handler-level
                    // pre-check, so the lost race is indistinguishable
                    // from the common path. Constraint names stay internal.
                    let message = match constraint {
                        "uq_users_email" => "A user with this email already exists",
                        _ => "Duplicate value violates a unique constraint",
                    };
                    return Some((StatusCode::CONFLICT, message.to_string()));
                }
            }
            tracing::error!(error = %db_err, "Database error");
            Some((
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ))
        }
        other => {
            tracing::error!(error = %other, "Database error");
            Some((
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ))
        }
    }
}
