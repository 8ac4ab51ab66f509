//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use sea_orm::SqlErr;
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    timestamp: DateTime<Utc>,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    ///
    /// Wire contract: every rejected operation is a client error with
    /// status 400, regardless of whether the cause was a missing record,
    /// a duplicate, or a malformed field. Only unexpected failures map
    /// to 500. Lookup endpoints that answer 404 do so at the handler.
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_)
            | AppError::Conflict(_)
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Show full message for client errors
            _ => self.to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    /// Refold constraint violations into domain conflicts.
    ///
    /// Unique indexes back the natural-key and membership checks the
    /// services perform up front; a violation slipping through means two
    /// writers raced, and the loser gets the same answer a pre-check
    /// would have given.
    fn from(err: sea_orm::DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            return AppError::Conflict(message);
        }
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                timestamp: Utc::now(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
