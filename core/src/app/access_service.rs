//! Access service
//!
//! Answers "may this user view this content" for videos and live sessions.
//! Reads roles and enrollment facts through ports, then hands them to the
//! entitlement evaluator. Role-based bypass happens here, once, instead of
//! at every call site.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entitlement;
use crate::domain::entities::{
    AccessDecision, AccessTier, BlockReason, Content, ContentId, EnrollmentFacts, PreviewRole,
    Role, UserId,
};
use crate::domain::ports::{ContentRepository, FactsProvider, RoleRepository};
use crate::error::AccessError;

/// Result of an access check, as returned to front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCheck {
    pub access: bool,
    /// `None` when the reason is unknown (the check itself failed)
    #[serde(default)]
    pub reason: Option<BlockReason>,
    /// User-facing explanation of the block reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessTier>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_instructor: bool,
    #[serde(default)]
    pub is_enrolled: bool,
    #[serde(default)]
    pub has_purchased: bool,
    #[serde(default)]
    pub has_subscription: bool,
    /// Set when the check could not be completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AccessCheck {
    /// Denial with an unknown reason. Used whenever the check fails.
    pub fn denied(error: impl Into<String>) -> Self {
        Self {
            access: false,
            reason: None,
            message: None,
            access_level: None,
            is_admin: false,
            is_instructor: false,
            is_enrolled: false,
            has_purchased: false,
            has_subscription: false,
            error: Some(error.into()),
        }
    }

    fn from_decision(
        content: &Content,
        facts: &EnrollmentFacts,
        roles: &[Role],
        decision: AccessDecision,
    ) -> Self {
        Self {
            access: decision.granted,
            reason: Some(decision.reason),
            message: decision.reason.message().map(str::to_string),
            access_level: Some(content.access_tier()),
            is_admin: roles.contains(&Role::Admin),
            is_instructor: roles.contains(&Role::Instructor),
            is_enrolled: facts.enrolled_in_batch,
            has_purchased: facts.has_purchased_course,
            has_subscription: facts.has_active_subscription,
            error: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        !self.access
    }
}

/// Service for content access checks
pub struct AccessService<FP, RR, CR>
where
    FP: FactsProvider,
    RR: RoleRepository,
    CR: ContentRepository,
{
    facts: Arc<FP>,
    roles: Arc<RR>,
    content: Arc<CR>,
}

impl<FP, RR, CR> AccessService<FP, RR, CR>
where
    FP: FactsProvider,
    RR: RoleRepository,
    CR: ContentRepository,
{
    pub fn new(facts: Arc<FP>, roles: Arc<RR>, content: Arc<CR>) -> Self {
        Self {
            facts,
            roles,
            content,
        }
    }

    /// Check access to a live session by ID
    pub async fn check_live_session_access(
        &self,
        user_id: &UserId,
        session_id: &ContentId,
        preview: Option<PreviewRole>,
    ) -> Result<AccessCheck, AccessError> {
        let session = self
            .content
            .find_live_session(session_id)
            .await?
            .ok_or(AccessError::ContentNotFound(*session_id))?;

        self.check_content_access(user_id, &session, preview).await
    }

    /// Check access to a video by ID
    pub async fn check_video_access(
        &self,
        user_id: &UserId,
        video_id: &ContentId,
        preview: Option<PreviewRole>,
    ) -> Result<AccessCheck, AccessError> {
        let video = self
            .content
            .find_video(video_id)
            .await?
            .ok_or(AccessError::ContentNotFound(*video_id))?;

        self.check_content_access(user_id, &video, preview).await
    }

    /// Check access to already-loaded content
    ///
    /// With a preview role the user's real purchase/subscription state is replaced
    /// and the privileged bypass is skipped, so admins see what that learner sees.
    pub async fn check_content_access(
        &self,
        user_id: &UserId,
        content: &Content,
        preview: Option<PreviewRole>,
    ) -> Result<AccessCheck, AccessError> {
        let roles = self.resolve_roles(user_id).await;
        let privileged = roles.iter().any(Role::bypasses_tier_checks);

        let facts = if privileged && preview.is_none() {
            // No need to read enrollment for users who see everything
            EnrollmentFacts::not_enrolled(*user_id, content.course_id(), content.batch_id())
                .privileged(true)
        } else {
            let facts = self
                .facts
                .fetch_facts(user_id, &content.course_id(), &content.batch_id())
                .await
                .map_err(AccessError::FactsUnavailable)?;
            match preview {
                Some(role) => facts.simulate(role),
                None => facts,
            }
        };

        let decision = entitlement::evaluate(content, &facts);

        tracing::debug!(
            user_id = %user_id,
            content_id = %content.id(),
            kind = %content.kind(),
            tier = %content.access_tier(),
            privileged,
            preview = ?preview,
            granted = decision.granted,
            reason = %decision.reason,
            "Evaluated content access"
        );

        Ok(AccessCheck::from_decision(content, &facts, &roles, decision))
    }

    /// Can this user create, update and delete live sessions?
    ///
    /// Any failure to read roles answers `false`.
    pub async fn can_manage_live_sessions(&self, user_id: &UserId) -> bool {
        match self.roles.find_roles(user_id).await {
            Ok(roles) => roles.iter().any(Role::can_manage_live_sessions),
            Err(e) => {
                tracing::warn!(error = %e, user_id = %user_id, "Failed to check live session permissions");
                false
            }
        }
    }

    /// Roles for a user; a lookup failure leaves the user unprivileged
    async fn resolve_roles(&self, user_id: &UserId) -> Vec<Role> {
        self.roles.find_roles(user_id).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, user_id = %user_id, "Failed to fetch roles, continuing without");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BatchId, CourseId};
    use crate::error::DomainError;
    use crate::test_utils::{
        enrolled_facts, purchased_facts, subscribed_facts, test_live_session, test_video,
        InMemoryContentRepository, InMemoryFactsProvider, InMemoryRoleRepository,
    };
    use async_trait::async_trait;
    use mockall::mock;

    type TestService =
        AccessService<InMemoryFactsProvider, InMemoryRoleRepository, InMemoryContentRepository>;

    fn create_service(
        facts: InMemoryFactsProvider,
        roles: InMemoryRoleRepository,
        content: InMemoryContentRepository,
    ) -> TestService {
        AccessService::new(Arc::new(facts), Arc::new(roles), Arc::new(content))
    }

    mock! {
        pub Facts {}

        #[async_trait]
        impl FactsProvider for Facts {
            async fn fetch_facts(
                &self,
                user_id: &UserId,
                course_id: &CourseId,
                batch_id: &BatchId,
            ) -> Result<EnrollmentFacts, DomainError>;
        }
    }

    #[tokio::test]
    async fn enrolled_user_can_view_free_video() {
        let user = UserId::new();
        let video = test_video(AccessTier::Free);
        let service = create_service(
            InMemoryFactsProvider::new().with_facts(enrolled_facts(user, &video)),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let check = service
            .check_video_access(&user, &video.id(), None)
            .await
            .unwrap();

        assert!(check.access);
        assert_eq!(check.reason, Some(BlockReason::None));
        assert_eq!(check.access_level, Some(AccessTier::Free));
        assert!(check.is_enrolled);
        assert!(check.message.is_none());
    }

    #[tokio::test]
    async fn paid_video_without_purchase_reports_purchase_required() {
        let user = UserId::new();
        let video = test_video(AccessTier::Paid);
        let service = create_service(
            InMemoryFactsProvider::new().with_facts(enrolled_facts(user, &video)),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let check = service
            .check_video_access(&user, &video.id(), None)
            .await
            .unwrap();

        assert!(!check.access);
        assert!(check.is_locked());
        assert_eq!(check.reason, Some(BlockReason::PurchaseRequired));
        assert_eq!(
            check.message.as_deref(),
            Some("This content requires course purchase")
        );
    }

    #[tokio::test]
    async fn subscriber_can_join_subscription_live_session() {
        let user = UserId::new();
        let session = test_live_session(AccessTier::Subscription);
        let service = create_service(
            InMemoryFactsProvider::new().with_facts(subscribed_facts(user, &session)),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(session.clone()),
        );

        let check = service
            .check_live_session_access(&user, &session.id(), None)
            .await
            .unwrap();

        assert!(check.access);
        assert!(check.has_subscription);
    }

    #[tokio::test]
    async fn user_without_enrollment_row_is_not_enrolled() {
        let user = UserId::new();
        let session = test_live_session(AccessTier::Free);
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(session.clone()),
        );

        let check = service
            .check_live_session_access(&user, &session.id(), None)
            .await
            .unwrap();

        assert!(!check.access);
        assert_eq!(check.reason, Some(BlockReason::NotEnrolled));
        assert!(!check.is_enrolled);
    }

    #[tokio::test]
    async fn admin_bypasses_tier_checks() {
        let admin = UserId::new();
        let session = test_live_session(AccessTier::Subscription);
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::new().with_role(admin, Role::Admin),
            InMemoryContentRepository::new().with_content(session.clone()),
        );

        let check = service
            .check_live_session_access(&admin, &session.id(), None)
            .await
            .unwrap();

        assert!(check.access);
        assert!(check.is_admin);
        assert!(!check.is_instructor);
    }

    #[tokio::test]
    async fn instructor_bypasses_tier_checks() {
        let instructor = UserId::new();
        let video = test_video(AccessTier::Paid);
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::new().with_role(instructor, Role::Instructor),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let check = service
            .check_video_access(&instructor, &video.id(), None)
            .await
            .unwrap();

        assert!(check.access);
        assert!(check.is_instructor);
    }

    #[tokio::test]
    async fn teacher_role_does_not_bypass_tier_checks() {
        let teacher = UserId::new();
        let video = test_video(AccessTier::Paid);
        let service = create_service(
            InMemoryFactsProvider::new().with_facts(enrolled_facts(teacher, &video)),
            InMemoryRoleRepository::new().with_role(teacher, Role::Teacher),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let check = service
            .check_video_access(&teacher, &video.id(), None)
            .await
            .unwrap();

        assert!(!check.access);
        assert_eq!(check.reason, Some(BlockReason::PurchaseRequired));
    }

    #[tokio::test]
    async fn privileged_user_never_triggers_facts_fetch() {
        let admin = UserId::new();
        let video = test_video(AccessTier::Subscription);

        let mut facts = MockFacts::new();
        facts.expect_fetch_facts().never();

        let service = AccessService::new(
            Arc::new(facts),
            Arc::new(InMemoryRoleRepository::new().with_role(admin, Role::Admin)),
            Arc::new(InMemoryContentRepository::new()),
        );

        let check = service
            .check_content_access(&admin, &video, None)
            .await
            .unwrap();

        assert!(check.access);
    }

    #[tokio::test]
    async fn facts_are_fetched_once_per_check() {
        let user = UserId::new();
        let video = test_video(AccessTier::Paid);
        let facts_row = purchased_facts(user, &video);
        let expected_batch = video.batch_id();

        let mut facts = MockFacts::new();
        facts
            .expect_fetch_facts()
            .withf(move |_, _, batch| *batch == expected_batch)
            .times(1)
            .returning(move |_, _, _| Ok(facts_row.clone()));

        let service = AccessService::new(
            Arc::new(facts),
            Arc::new(InMemoryRoleRepository::new()),
            Arc::new(InMemoryContentRepository::new()),
        );

        let check = service
            .check_content_access(&user, &video, None)
            .await
            .unwrap();

        assert!(check.access);
        assert!(check.has_purchased);
    }

    #[tokio::test]
    async fn facts_fetch_failure_is_an_error_not_a_grant() {
        let user = UserId::new();
        let video = test_video(AccessTier::Free);
        let service = create_service(
            InMemoryFactsProvider::failing(),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let result = service.check_video_access(&user, &video.id(), None).await;

        assert!(matches!(result, Err(AccessError::FactsUnavailable(_))));
    }

    #[tokio::test]
    async fn role_lookup_failure_leaves_user_unprivileged() {
        let user = UserId::new();
        let video = test_video(AccessTier::Paid);
        let service = create_service(
            InMemoryFactsProvider::new().with_facts(enrolled_facts(user, &video)),
            InMemoryRoleRepository::failing(),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let check = service
            .check_video_access(&user, &video.id(), None)
            .await
            .unwrap();

        assert!(!check.access);
        assert!(!check.is_admin);
        assert_eq!(check.reason, Some(BlockReason::PurchaseRequired));
    }

    #[tokio::test]
    async fn missing_video_is_content_not_found() {
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new(),
        );
        let missing = ContentId::new();

        let result = service
            .check_video_access(&UserId::new(), &missing, None)
            .await;

        assert!(matches!(result, Err(AccessError::ContentNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn video_id_is_not_found_as_live_session() {
        let video = test_video(AccessTier::Free);
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let result = service
            .check_live_session_access(&UserId::new(), &video.id(), None)
            .await;

        assert!(matches!(result, Err(AccessError::ContentNotFound(_))));
    }

    #[tokio::test]
    async fn admin_preview_as_student_sees_lock() {
        let admin = UserId::new();
        let video = test_video(AccessTier::Paid);
        let service = create_service(
            InMemoryFactsProvider::new().with_facts(purchased_facts(admin, &video)),
            InMemoryRoleRepository::new().with_role(admin, Role::Admin),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let check = service
            .check_video_access(&admin, &video.id(), Some(PreviewRole::Student))
            .await
            .unwrap();

        assert!(!check.access);
        assert_eq!(check.reason, Some(BlockReason::PurchaseRequired));
        assert!(check.is_admin);
    }

    #[tokio::test]
    async fn preview_as_paid_cannot_open_subscription_content() {
        let user = UserId::new();
        let session = test_live_session(AccessTier::Subscription);
        let service = create_service(
            InMemoryFactsProvider::new().with_facts(enrolled_facts(user, &session)),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(session.clone()),
        );

        let paid = service
            .check_live_session_access(&user, &session.id(), Some(PreviewRole::Paid))
            .await
            .unwrap();
        let subscriber = service
            .check_live_session_access(&user, &session.id(), Some(PreviewRole::Subscriber))
            .await
            .unwrap();

        assert_eq!(paid.reason, Some(BlockReason::SubscriptionRequired));
        assert!(subscriber.access);
    }

    #[tokio::test]
    async fn preview_does_not_enroll_an_outsider() {
        let user = UserId::new();
        let video = test_video(AccessTier::Free);
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::new(),
            InMemoryContentRepository::new().with_content(video.clone()),
        );

        let check = service
            .check_video_access(&user, &video.id(), Some(PreviewRole::Subscriber))
            .await
            .unwrap();

        assert_eq!(check.reason, Some(BlockReason::NotEnrolled));
    }

    #[tokio::test]
    async fn can_manage_live_sessions_for_admin_and_instructor_only() {
        let admin = UserId::new();
        let instructor = UserId::new();
        let student = UserId::new();
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::new()
                .with_role(admin, Role::Admin)
                .with_role(instructor, Role::Instructor)
                .with_role(student, Role::Student),
            InMemoryContentRepository::new(),
        );

        assert!(service.can_manage_live_sessions(&admin).await);
        assert!(service.can_manage_live_sessions(&instructor).await);
        assert!(!service.can_manage_live_sessions(&student).await);
        assert!(!service.can_manage_live_sessions(&UserId::new()).await);
    }

    #[tokio::test]
    async fn can_manage_live_sessions_is_false_on_lookup_failure() {
        let service = create_service(
            InMemoryFactsProvider::new(),
            InMemoryRoleRepository::failing(),
            InMemoryContentRepository::new(),
        );

        assert!(!service.can_manage_live_sessions(&UserId::new()).await);
    }

    #[test]
    fn denied_check_has_unknown_reason() {
        let check = AccessCheck::denied("network error");
        assert!(!check.access);
        assert!(check.reason.is_none());
        assert_eq!(check.error.as_deref(), Some("network error"));
    }

    #[test]
    fn access_check_serializes_camel_case() {
        let check = AccessCheck {
            access: false,
            reason: Some(BlockReason::SubscriptionRequired),
            message: Some("This content requires an active subscription".to_string()),
            access_level: Some(AccessTier::Subscription),
            is_admin: false,
            is_instructor: false,
            is_enrolled: true,
            has_purchased: true,
            has_subscription: false,
            error: None,
        };

        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["access"], false);
        assert_eq!(json["reason"], "subscription_required");
        assert_eq!(json["accessLevel"], "subscription");
        assert_eq!(json["isEnrolled"], true);
        assert_eq!(json["hasPurchased"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn access_check_deserializes_minimal_payload() {
        let check: AccessCheck =
            serde_json::from_str(r#"{"access": true, "isAdmin": true}"#).unwrap();
        assert!(check.access);
        assert!(check.is_admin);
        assert!(check.reason.is_none());
        assert!(check.access_level.is_none());
    }
}
