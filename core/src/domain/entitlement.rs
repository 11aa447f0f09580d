//! Entitlement evaluation
//!
//! Decides whether a user may view a video or live session given their
//! enrollment facts. Pure and total: no I/O, no state, no errors.
//!
//! Evaluation order:
//! 1. Privileged users (admins, instructors) are always granted.
//! 2. Users not enrolled in the content's batch are always blocked.
//! 3. The content's access tier decides:
//!
//! | Tier         | Granted when                |
//! |--------------|-----------------------------|
//! | Free         | always                      |
//! | Paid         | purchased OR subscribed     |
//! | Subscription | subscribed                  |

use super::entities::{AccessDecision, AccessTier, BlockReason, Content, EnrollmentFacts};

/// Can the user described by `facts` view `content`?
pub fn can_access(content: &Content, facts: &EnrollmentFacts) -> bool {
    if facts.is_privileged {
        return true;
    }
    if !is_enrolled_for(content, facts) {
        return false;
    }
    tier_grants(content.access_tier(), facts)
}

/// Presentation-side complement of [`can_access`]
pub fn is_locked(content: &Content, facts: &EnrollmentFacts) -> bool {
    !can_access(content, facts)
}

/// The reason to show a user who cannot view `content`.
///
/// Returns [`BlockReason::None`] exactly when [`can_access`] is true.
pub fn describe_block_reason(content: &Content, facts: &EnrollmentFacts) -> BlockReason {
    if facts.is_privileged {
        return BlockReason::None;
    }
    if !is_enrolled_for(content, facts) {
        return BlockReason::NotEnrolled;
    }
    match content.access_tier() {
        AccessTier::Subscription if !facts.has_active_subscription => {
            BlockReason::SubscriptionRequired
        }
        AccessTier::Paid if !facts.has_purchased_course && !facts.has_active_subscription => {
            BlockReason::PurchaseRequired
        }
        _ => BlockReason::None,
    }
}

/// Evaluate both the decision and its reason in one pass
pub fn evaluate(content: &Content, facts: &EnrollmentFacts) -> AccessDecision {
    let reason = describe_block_reason(content, facts);
    AccessDecision {
        granted: !reason.is_blocked(),
        reason,
    }
}

/// Facts that belong to another batch say nothing about this one
fn is_enrolled_for(content: &Content, facts: &EnrollmentFacts) -> bool {
    facts.enrolled_in_batch && facts.batch_id == content.batch_id()
}

fn tier_grants(tier: AccessTier, facts: &EnrollmentFacts) -> bool {
    match tier {
        AccessTier::Free => true,
        AccessTier::Paid => facts.has_purchased_course || facts.has_active_subscription,
        AccessTier::Subscription => facts.has_active_subscription,
    }
}
