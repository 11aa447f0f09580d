//! Repository port traits
//!
//! These traits define the interface for reading platform state.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    BatchId, Content, ContentId, CourseId, EnrollmentFacts, Role, UserId,
};
use crate::error::DomainError;

/// Source of up-to-date enrollment, purchase and subscription state
#[async_trait]
pub trait FactsProvider: Send + Sync {
    /// Fetch facts for a user in a batch.
    ///
    /// A user with no enrollment record gets `EnrollmentFacts::not_enrolled`,
    /// not an error. Errors mean the facts could not be read at all.
    async fn fetch_facts(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
        batch_id: &BatchId,
    ) -> Result<EnrollmentFacts, DomainError>;
}

/// Repository for user roles
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// All roles held by a user (empty if none)
    async fn find_roles(&self, user_id: &UserId) -> Result<Vec<Role>, DomainError>;
}

/// Repository for gated content
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Find a video by ID
    async fn find_video(&self, id: &ContentId) -> Result<Option<Content>, DomainError>;

    /// Find a live session by ID
    async fn find_live_session(&self, id: &ContentId) -> Result<Option<Content>, DomainError>;
}
