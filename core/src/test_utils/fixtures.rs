//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    AccessTier, BatchId, Content, ContentId, CourseId, EnrollmentFacts, LiveSession,
    SessionStatus, UserId, Video,
};

/// Create a test video with the given tier in a fresh course and batch
pub fn test_video(tier: AccessTier) -> Content {
    Content::Video(Video {
        id: ContentId::new(),
        course_id: CourseId::new(),
        batch_id: BatchId::new(),
        title: "Quadratic Equations".to_string(),
        description: Some("Factorisation and the discriminant".to_string()),
        video_url: "https://cdn.test/videos/quadratics.mp4".to_string(),
        thumbnail_url: None,
        duration: Some(1800),
        access_tier: tier,
        is_live_recording: false,
        live_session_id: None,
        created_at: Some(Utc::now()),
    })
}

/// Create a test live session with the given tier in a fresh course and batch
pub fn test_live_session(tier: AccessTier) -> Content {
    let start = Utc::now();
    Content::LiveSession(LiveSession {
        id: ContentId::new(),
        course_id: CourseId::new(),
        batch_id: BatchId::new(),
        title: "Organic Chemistry Live".to_string(),
        description: None,
        instructor_id: Some(UserId::new()),
        scheduled_start_time: Some(start),
        scheduled_end_time: Some(start + chrono::Duration::hours(1)),
        status: Some(SessionStatus::Scheduled),
        stream_url: Some("rtmp://stream.test/live/organic".to_string()),
        recorded_url: None,
        is_active: true,
        access_tier: tier,
    })
}

/// Facts for a user enrolled in the content's batch, with nothing purchased
pub fn enrolled_facts(user_id: UserId, content: &Content) -> EnrollmentFacts {
    EnrollmentFacts::enrolled(user_id, content.course_id(), content.batch_id())
}

/// Facts for a user enrolled in the content's batch who bought the course
pub fn purchased_facts(user_id: UserId, content: &Content) -> EnrollmentFacts {
    enrolled_facts(user_id, content).with_purchase(true)
}

/// Facts for a user enrolled in the content's batch with an active subscription
pub fn subscribed_facts(user_id: UserId, content: &Content) -> EnrollmentFacts {
    enrolled_facts(user_id, content).with_subscription(true)
}
