//! Enrollment facts
//!
//! Purchase, subscription and enrollment state for one user in one batch.
//! Facts are read fresh for every evaluation; nothing here is cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BatchId, CourseId, UserId};

/// What the platform knows about a user's standing in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentFacts {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub batch_id: BatchId,
    pub enrolled_in_batch: bool,
    pub has_purchased_course: bool,
    pub has_active_subscription: bool,
    /// Holds a role that bypasses tier checks (admin, instructor)
    pub is_privileged: bool,
    pub enrollment_date: Option<DateTime<Utc>>,
    /// Informational; not enforced by the evaluator
    pub access_expiry_date: Option<DateTime<Utc>>,
    /// Informational; not enforced by the evaluator
    pub grace_period_end_date: Option<DateTime<Utc>>,
}

impl EnrollmentFacts {
    /// Facts for a user with no enrollment row in the batch
    pub fn not_enrolled(user_id: UserId, course_id: CourseId, batch_id: BatchId) -> Self {
        Self {
            user_id,
            course_id,
            batch_id,
            enrolled_in_batch: false,
            has_purchased_course: false,
            has_active_subscription: false,
            is_privileged: false,
            enrollment_date: None,
            access_expiry_date: None,
            grace_period_end_date: None,
        }
    }

    /// Facts for an enrolled user who has neither purchased nor subscribed
    pub fn enrolled(user_id: UserId, course_id: CourseId, batch_id: BatchId) -> Self {
        Self {
            enrolled_in_batch: true,
            ..Self::not_enrolled(user_id, course_id, batch_id)
        }
    }

    pub fn with_purchase(mut self, purchased: bool) -> Self {
        self.has_purchased_course = purchased;
        self
    }

    pub fn with_subscription(mut self, subscribed: bool) -> Self {
        self.has_active_subscription = subscribed;
        self
    }

    pub fn privileged(mut self, privileged: bool) -> Self {
        self.is_privileged = privileged;
        self
    }

    /// Replace purchase/subscription state with a simulated learner profile.
    ///
    /// Previews always evaluate as a regular learner, so the privileged flag is cleared.
    pub fn simulate(mut self, preview: PreviewRole) -> Self {
        let (purchased, subscribed) = match preview {
            PreviewRole::Student => (false, false),
            PreviewRole::Paid => (true, false),
            PreviewRole::Subscriber => (true, true),
        };
        self.has_purchased_course = purchased;
        self.has_active_subscription = subscribed;
        self.is_privileged = false;
        self
    }
}

/// Learner profile an admin can preview content as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewRole {
    Student,
    Paid,
    Subscriber,
}

impl std::fmt::Display for PreviewRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewRole::Student => write!(f, "student"),
            PreviewRole::Paid => write!(f, "paid"),
            PreviewRole::Subscriber => write!(f, "subscriber"),
        }
    }
}

impl std::str::FromStr for PreviewRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(PreviewRole::Student),
            "paid" => Ok(PreviewRole::Paid),
            "subscriber" => Ok(PreviewRole::Subscriber),
            _ => Err(format!("Unknown preview role: {}", s)),
        }
    }
}
