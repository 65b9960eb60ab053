use crate::{db, storage};
use axum::{http, response, Json};
use serde_json::json;
use std::{error, fmt};
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    // 4xx
    BadRequest(String),
    Conflict(String),
    NotFound(String),
    Validation(Vec<String>),

    // 5xx
    Internal(anyhow::Error),
    Persistence(db::DbError),
    Upload(storage::StorageError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation error: {}", errors.join(", ")),
            AppError::Internal(err) => write!(f, "Internal error: {}", err),
            AppError::Persistence(err) => write!(f, "Persistence error: {}", err),
            AppError::Upload(err) => write!(f, "Upload error: {}", err),
        }
    }
}

impl error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<db::DbError> for AppError {
    fn from(err: db::DbError) -> Self {
        AppError::Persistence(err)
    }
}

impl From<storage::StorageError> for AppError {
    fn from(err: storage::StorageError) -> Self {
        AppError::Upload(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(validation_messages(&err))
    }
}

impl response::IntoResponse for AppError {
    fn into_response(self) -> response::Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => (
                http::StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": msg }),
            ),
            AppError::Conflict(msg) => (
                http::StatusCode::CONFLICT,
                json!({ "success": false, "error": msg }),
            ),
            AppError::NotFound(msg) => (
                http::StatusCode::NOT_FOUND,
                json!({ "success": false, "error": msg }),
            ),
            AppError::Validation(errors) => (
                http::StatusCode::BAD_REQUEST,
                json!({ "success": false, "errors": errors }),
            ),
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": "An internal error occurred" }),
                )
            }
            AppError::Persistence(err) => {
                tracing::error!("Persistence error: {:?}", err);
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": "A database error occurred",
                        "details": err.to_string(),
                    }),
                )
            }
            AppError::Upload(err) => {
                tracing::error!("Upload error: {:?}", err);
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": "File upload failed",
                        "details": err.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        AppError::Internal(err.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(errors: Vec<String>) -> Self {
        AppError::Validation(errors)
    }
}

/// Flattens `validator` output into the plain message list the response
/// envelope carries.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for field '{}'", field));

            messages.push(message);
        }
    }

    messages.sort();
    messages
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
