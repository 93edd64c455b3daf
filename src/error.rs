//! Typed errors and HTTP mapping.

use crate::model::StudentSummary;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Failures raised by a `StudentRepository`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// The storage-level unique constraint on `student.email` rejected a write.
    #[error("email already taken: {0}")]
    EmailTaken(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Student with email {email} already exists")]
    EmailTaken {
        email: String,
        existing: Option<StudentSummary>,
    },
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[source] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn invalid_format() -> Self {
        AppError::validation("Invalid JSON format")
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Db(e) => AppError::Db(e),
            StoreError::EmailTaken(email) => AppError::EmailTaken {
                email,
                existing: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage operation failed");
                crate::response::message(StatusCode::INTERNAL_SERVER_ERROR, "Internal database error")
                    .into_response()
            }
            AppError::EmailTaken { email, existing } => {
                let body = crate::response::Message {
                    message: format!("Student with email {} already exists", email),
                    data: existing,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::PayloadTooLarge => {
                crate::response::message(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response()
            }
            // Unknown ids are reported as 400, the same as malformed input.
            AppError::Validation(message) | AppError::NotFound(message) => {
                crate::response::message(StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}
