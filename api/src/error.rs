//! HTTP error type for the CourseGate API
//!
//! Wraps core `AccessError`/`DomainError` and maps them to status codes.
//! No error path ever produces a grant; front ends treat any non-2xx as denied.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coursegate_core::{AccessError, DomainError};
use serde::Serialize;
use thiserror::Error;

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    /// Always false; lets clients read any error body as a denial
    access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

fn domain_status(e: &DomainError) -> (StatusCode, &'static str, Option<String>) {
    match e {
        DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        DomainError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            "Validation error",
            Some(msg.clone()),
        ),
        DomainError::Database(msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            )
        }
        DomainError::Internal(msg) => {
            tracing::error!("Internal error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            )
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Access(AccessError::ContentNotFound(id)) => (
                StatusCode::NOT_FOUND,
                "Content not found",
                Some(id.to_string()),
            ),
            AppError::Access(AccessError::FactsUnavailable(e)) => {
                tracing::error!(error = %e, "Enrollment facts unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Access check unavailable",
                    None,
                )
            }
            AppError::Access(AccessError::Domain(e)) | AppError::Domain(e) => domain_status(e),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            access: false,
            details,
        });

        (status, body).into_response()
    }
}
