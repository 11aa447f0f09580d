//! Domain entities
//!
//! Pure domain models for gated content and the facts used to evaluate access.
//! These are separate from the SeaORM entities in the API crate.

pub mod access;
pub mod content;
pub mod enrollment;
pub mod ids;
pub mod role;

pub use access::{AccessDecision, AccessTier, BlockReason};
pub use content::{Content, ContentKind, LiveSession, SessionStatus, Video};
pub use enrollment::{EnrollmentFacts, PreviewRole};
pub use ids::{BatchId, ContentId, CourseId, UserId};
pub use role::Role;
