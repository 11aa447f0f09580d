//! Gated content: videos and live sessions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::access::AccessTier;
use super::ids::{BatchId, ContentId, CourseId, UserId};

/// A recorded video in a course batch
#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub id: ContentId,
    pub course_id: CourseId,
    pub batch_id: BatchId,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    /// Duration in seconds
    pub duration: Option<i32>,
    pub access_tier: AccessTier,
    pub is_live_recording: bool,
    /// Live session this video was recorded from
    pub live_session_id: Option<ContentId>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Live session lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Live,
    Ended,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Scheduled => write!(f, "scheduled"),
            SessionStatus::Live => write!(f, "live"),
            SessionStatus::Ended => write!(f, "ended"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(SessionStatus::Scheduled),
            "live" => Ok(SessionStatus::Live),
            "ended" => Ok(SessionStatus::Ended),
            _ => Err(format!("Unknown session status: {}", s)),
        }
    }
}

/// A scheduled or running live class
#[derive(Debug, Clone, Serialize)]
pub struct LiveSession {
    pub id: ContentId,
    pub course_id: CourseId,
    pub batch_id: BatchId,
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: Option<UserId>,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub status: Option<SessionStatus>,
    pub stream_url: Option<String>,
    pub recorded_url: Option<String>,
    pub is_active: bool,
    pub access_tier: AccessTier,
}

/// Discriminates the two kinds of gated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Video,
    LiveSession,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Video => write!(f, "video"),
            ContentKind::LiveSession => write!(f, "live_session"),
        }
    }
}

/// A piece of content subject to entitlement checks
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Video(Video),
    LiveSession(LiveSession),
}

impl Content {
    pub fn id(&self) -> ContentId {
        match self {
            Content::Video(v) => v.id,
            Content::LiveSession(s) => s.id,
        }
    }

    pub fn course_id(&self) -> CourseId {
        match self {
            Content::Video(v) => v.course_id,
            Content::LiveSession(s) => s.course_id,
        }
    }

    pub fn batch_id(&self) -> BatchId {
        match self {
            Content::Video(v) => v.batch_id,
            Content::LiveSession(s) => s.batch_id,
        }
    }

    pub fn access_tier(&self) -> AccessTier {
        match self {
            Content::Video(v) => v.access_tier,
            Content::LiveSession(s) => s.access_tier,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Content::Video(v) => &v.title,
            Content::LiveSession(s) => &s.title,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Video(_) => ContentKind::Video,
            Content::LiveSession(_) => ContentKind::LiveSession,
        }
    }
}

impl From<Video> for Content {
    fn from(video: Video) -> Self {
        Content::Video(video)
    }
}

impl From<LiveSession> for Content {
    fn from(session: LiveSession) -> Self {
        Content::LiveSession(session)
    }
}
