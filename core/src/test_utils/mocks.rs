//! In-memory implementations of port traits
//!
//! These store fixed data in memory and can be configured to fail.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    BatchId, Content, ContentId, ContentKind, CourseId, EnrollmentFacts, Role, UserId,
};
use crate::domain::ports::{ContentRepository, FactsProvider, RoleRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Facts Provider
// ============================================================================

#[derive(Default)]
pub struct InMemoryFactsProvider {
    facts: Arc<RwLock<HashMap<(UserId, BatchId), EnrollmentFacts>>>,
    fail: bool,
}

impl InMemoryFactsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every fetch fails, as if the store were unreachable
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with facts for testing
    pub fn with_facts(self, facts: EnrollmentFacts) -> Self {
        self.facts
            .write()
            .unwrap()
            .insert((facts.user_id, facts.batch_id), facts);
        self
    }
}

#[async_trait]
impl FactsProvider for InMemoryFactsProvider {
    async fn fetch_facts(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
        batch_id: &BatchId,
    ) -> Result<EnrollmentFacts, DomainError> {
        if self.fail {
            return Err(DomainError::Database("connection refused".to_string()));
        }

        let facts = self.facts.read().unwrap();
        Ok(facts
            .get(&(*user_id, *batch_id))
            .cloned()
            .unwrap_or_else(|| EnrollmentFacts::not_enrolled(*user_id, *course_id, *batch_id)))
    }
}

// ============================================================================
// In-Memory Role Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRoleRepository {
    roles: Arc<RwLock<HashMap<UserId, Vec<Role>>>>,
    fail: bool,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Grant a role to a user
    pub fn with_role(self, user_id: UserId, role: Role) -> Self {
        self.roles
            .write()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(role);
        self
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_roles(&self, user_id: &UserId) -> Result<Vec<Role>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("connection refused".to_string()));
        }

        let roles = self.roles.read().unwrap();
        Ok(roles.get(user_id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// In-Memory Content Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryContentRepository {
    content: Arc<RwLock<HashMap<ContentId, Content>>>,
    fail: bool,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every lookup hits an unreadable row
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_content(self, content: Content) -> Self {
        self.content.write().unwrap().insert(content.id(), content);
        self
    }

    fn find_kind(
        &self,
        id: &ContentId,
        kind: ContentKind,
    ) -> Result<Option<Content>, DomainError> {
        if self.fail {
            return Err(DomainError::Internal(format!(
                "{} {} has no course or batch",
                kind, id
            )));
        }

        let content = self.content.read().unwrap();
        Ok(content.get(id).filter(|c| c.kind() == kind).cloned())
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find_video(&self, id: &ContentId) -> Result<Option<Content>, DomainError> {
        self.find_kind(id, ContentKind::Video)
    }

    async fn find_live_session(&self, id: &ContentId) -> Result<Option<Content>, DomainError> {
        self.find_kind(id, ContentKind::LiveSession)
    }
}
