//! Error types for the CourseGate core
//!
//! - `DomainError`: failures reported by port implementations (persistence, lookups)
//! - `AccessError`: access service errors, surfaced to callers as "access denied"
//!
//! The entitlement evaluator itself never fails.

use thiserror::Error;

use crate::domain::entities::ContentId;

/// Domain layer errors - reported by ports and adapters
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Access service errors
///
/// None of these may be interpreted as a grant.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Enrollment facts unavailable: {0}")]
    FactsUnavailable(#[source] DomainError),

    #[error("Content not found: {0}")]
    ContentNotFound(ContentId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
