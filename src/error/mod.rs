//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::ValidationError;

pub use codes::ErrorCode;

/// Message returned to clients for every 5xx response.
pub const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submitted feedback failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body could not be read as a JSON object.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Missing or wrong admin credential.
    #[error("Unauthorized")]
    Unauthorized,

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation(ValidationError::MissingField(_)) => ErrorCode::MISSING_FIELD,
            Self::Validation(ValidationError::FieldTooLong { .. }) => ErrorCode::FIELD_TOO_LONG,
            Self::Validation(ValidationError::InvalidRating) => ErrorCode::INVALID_RATING,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::Unauthorized => ErrorCode::UNAUTHORIZED,
            Self::NotFound(_) => ErrorCode::NOT_FOUND,
            Self::Storage(StorageError::Constraint(_)) => ErrorCode::CONSTRAINT_VIOLATION,
            Self::Storage(_) => ErrorCode::STORAGE_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    ///
    /// Server-side failures never expose engine details.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            GENERIC_INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let code = error_code.as_i32();

        if status.is_server_error() {
            tracing::error!(
                error_code = code,
                category = %error_code.category(),
                status = %status,
                error = %self,
                "Request failed"
            );
        } else {
            tracing::warn!(
                error_code = code,
                category = %error_code.category(),
                status = %status,
                error = %self,
                "Request rejected"
            );
        }

        error_response(status, self.error_code(), &self.public_message())
    }
}

/// Build the JSON error body shared by handlers, middleware and fallbacks.
pub fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = Json(json!({
        "code": code.as_i32(),
        "error": message,
    }));

    (status, body).into_response()
}

/// Storage-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Connection or pool failure.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Query execution error.
    #[error("Query failed: {0}")]
    Query(String),

    /// A table constraint rejected the write.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// File I/O error.
    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation => Self::Constraint(db_err.message().to_string()),
                _ => Self::Query(db_err.message().to_string()),
            },
            sqlx::Error::Io(e) => Self::Connection(e.to_string()),
            e @ (sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Configuration(_)) => Self::Connection(e.to_string()),
            e => Self::Query(e.to_string()),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileIO(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `StorageError`.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
