use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use league_core::error::CoreError;
use serde_json::json;

/// Error returned by every league handler.
///
/// Rendered as `{"error": <message>, "code": <CODE>}`. Finals with too few
/// ranked teams surface as `INSUFFICIENT_DATA`; constraint violations from
/// the teams and players tables surface as `CONFLICT` or `NOT_FOUND`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed input the extractors accepted, e.g. a non-array fixture batch.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

type ErrorParts = (StatusCode, &'static str, String);

/// Logged in full, returned to the caller without detail.
fn internal(detail: &dyn std::fmt::Display) -> ErrorParts {
    tracing::error!(error = %detail, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn core_parts(err: &CoreError) -> ErrorParts {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::InsufficientData(msg) => {
            (StatusCode::BAD_REQUEST, "INSUFFICIENT_DATA", msg.clone())
        }
        CoreError::Internal(msg) => internal(msg),
    }
}

/// Map Postgres failures onto the league's error codes.
///
/// - `RowNotFound`: 404.
/// - 23505 on a `uq_*` constraint (team names): 409.
/// - 23503 (a player pointing at a missing team): 404.
/// - Anything else: 500.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    let sqlx::Error::Database(db_err) = err else {
        return match err {
            sqlx::Error::RowNotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            other => internal(other),
        };
    };

    match db_err.code().as_deref() {
        Some("23505") => match db_err.constraint() {
            Some(constraint) if constraint.starts_with("uq_") => (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            ),
            _ => internal(db_err),
        },
        Some("23503") => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Referenced resource not found".to_string(),
        ),
        _ => internal(db_err),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => internal(msg),
        };

        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}
