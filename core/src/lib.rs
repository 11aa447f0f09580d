//! CourseGate core
//!
//! Content entitlement rules for the learning platform, shared by every front end.
//! Uses hexagonal (ports & adapters) architecture:
//! - `domain`: entities, the entitlement evaluator, and port traits
//! - `app`: the access service that wires ports to the evaluator
//! - `error`: error types for the domain and service layers

pub mod app;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::{AccessCheck, AccessService};
pub use domain::entitlement::{can_access, describe_block_reason, evaluate, is_locked};
pub use domain::entities::{
    AccessDecision, AccessTier, BatchId, BlockReason, Content, ContentId, ContentKind, CourseId,
    EnrollmentFacts, LiveSession, PreviewRole, Role, SessionStatus, UserId, Video,
};
pub use error::{AccessError, DomainError};
