use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::DomainValidationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy.
///
/// - `Validation` - malformed or out-of-range input, or a domain invariant
///   violation; carries the offending field path, the expected shape, and the
///   rejected value in `details`
/// - `NotFound` - a lookup by identity found no record
/// - `Internal` - infrastructure failure; the caller-visible payload stays
///   opaque, detail goes to the log
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    /// Validation error for one offending field.
    ///
    /// `details` carries `{path: "Expected <expectation>, received: <value>"}`,
    /// the shape the original query surface reported.
    pub fn validation(path: &str, expectation: &str, value: &str) -> Self {
        Self::Validation {
            message: "ValidationError".to_string(),
            details: json!({ path: format!("Expected {expectation}, received: {value}") }),
        }
    }

    /// Not-found signal for a missing entity id.
    pub fn entity_not_found(id: &str) -> Self {
        Self::NotFound {
            message: format!("Entity #{id} was not found"),
            details: json!({ "id": id }),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<DomainValidationError> for AppError {
    fn from(err: DomainValidationError) -> Self {
        Self::validation(err.path, err.expectation, &err.value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

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

/// Downgrades a driver error to an opaque internal failure.
///
/// The full error is logged here; the response body never carries driver
/// detail such as connection strings or constraint names.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}
