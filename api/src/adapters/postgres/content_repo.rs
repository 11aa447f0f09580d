//! PostgreSQL adapter for ContentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait};

use coursegate_core::domain::ports::ContentRepository;
use coursegate_core::{
    AccessTier, BatchId, Content, ContentId, CourseId, DomainError, LiveSession, UserId, Video,
};

use crate::entity::{live_sessions, videos};

/// PostgreSQL implementation of ContentRepository
pub struct PostgresContentRepository {
    db: DatabaseConnection,
}

impl PostgresContentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Content without an owning course and batch cannot be evaluated.
/// Such a row is a data defect and surfaces as `DomainError::Internal`.
fn owner(
    kind: &str,
    id: uuid::Uuid,
    course_id: Option<uuid::Uuid>,
    batch_id: Option<uuid::Uuid>,
) -> Result<(CourseId, BatchId), DomainError> {
    match (course_id, batch_id) {
        (Some(c), Some(b)) => Ok((CourseId(c), BatchId(b))),
        _ => Err(DomainError::Internal(format!(
            "{} {} has no course or batch",
            kind, id
        ))),
    }
}

impl TryFrom<videos::Model> for Content {
    type Error = DomainError;

    fn try_from(m: videos::Model) -> Result<Self, Self::Error> {
        let (course_id, batch_id) = owner("video", m.id, m.course_id, m.batch_id)?;
        Ok(Content::Video(Video {
            id: ContentId(m.id),
            course_id,
            batch_id,
            title: m.title,
            description: m.description,
            video_url: m.video_url,
            thumbnail_url: m.thumbnail_url,
            duration: m.duration,
            access_tier: AccessTier::from_stored(m.access_level.as_deref()),
            is_live_recording: m.is_live_recording.unwrap_or(false),
            live_session_id: m.live_session_id.map(ContentId),
            created_at: m.created_at.map(|t| t.with_timezone(&Utc)),
        }))
    }
}

impl TryFrom<live_sessions::Model> for Content {
    type Error = DomainError;

    fn try_from(m: live_sessions::Model) -> Result<Self, Self::Error> {
        let (course_id, batch_id) = owner("live session", m.id, m.course_id, m.batch_id)?;
        Ok(Content::LiveSession(LiveSession {
            id: ContentId(m.id),
            course_id,
            batch_id,
            title: m.title,
            description: m.description,
            instructor_id: m.instructor_id.map(UserId),
            scheduled_start_time: m.scheduled_start_time.map(|t| t.with_timezone(&Utc)),
            scheduled_end_time: m.scheduled_end_time.map(|t| t.with_timezone(&Utc)),
            status: m.status.as_deref().and_then(|s| s.parse().ok()),
            stream_url: m.stream_url,
            recorded_url: m.recorded_url,
            is_active: m.is_active.unwrap_or(false),
            access_tier: AccessTier::from_stored(m.access_level.as_deref()),
        }))
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn find_video(&self, id: &ContentId) -> Result<Option<Content>, DomainError> {
        let result = videos::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Content::try_from).transpose()
    }

    async fn find_live_session(&self, id: &ContentId) -> Result<Option<Content>, DomainError> {
        let result = live_sessions::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Content::try_from).transpose()
    }
}
