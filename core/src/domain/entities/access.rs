//! Access tiers and access decisions

use serde::{Deserialize, Serialize};

/// Access tier attached to a video or live session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    #[default]
    Free,
    Paid,
    Subscription,
}

impl AccessTier {
    /// Resolve a tier as stored upstream (`access_level` column).
    ///
    /// Missing, empty and unrecognized values all resolve to `Free`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => AccessTier::Free,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(access_level = raw, "Unknown access level, treating as free");
                AccessTier::Free
            }),
        }
    }
}

impl std::fmt::Display for AccessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessTier::Free => write!(f, "free"),
            AccessTier::Paid => write!(f, "paid"),
            AccessTier::Subscription => write!(f, "subscription"),
        }
    }
}

impl std::str::FromStr for AccessTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(AccessTier::Free),
            "paid" => Ok(AccessTier::Paid),
            "subscription" => Ok(AccessTier::Subscription),
            _ => Err(format!("Unknown access tier: {}", s)),
        }
    }
}

/// Why a user cannot view a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    NotEnrolled,
    SubscriptionRequired,
    PurchaseRequired,
    /// Access is granted
    None,
}

impl BlockReason {
    pub fn is_blocked(&self) -> bool {
        *self != BlockReason::None
    }

    /// User-facing message, `None` when nothing blocks access
    pub fn message(&self) -> Option<&'static str> {
        match self {
            BlockReason::NotEnrolled => Some("You are not enrolled in this batch"),
            BlockReason::SubscriptionRequired => {
                Some("This content requires an active subscription")
            }
            BlockReason::PurchaseRequired => Some("This content requires course purchase"),
            BlockReason::None => None,
        }
    }
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::NotEnrolled => write!(f, "not_enrolled"),
            BlockReason::SubscriptionRequired => write!(f, "subscription_required"),
            BlockReason::PurchaseRequired => write!(f, "purchase_required"),
            BlockReason::None => write!(f, "none"),
        }
    }
}

/// Outcome of evaluating one piece of content against one set of facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    pub granted: bool,
    pub reason: BlockReason,
}

impl AccessDecision {
    pub fn is_locked(&self) -> bool {
        !self.granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tier_defaults_to_free() {
        assert_eq!(AccessTier::from_stored(None), AccessTier::Free);
        assert_eq!(AccessTier::from_stored(Some("")), AccessTier::Free);
        assert_eq!(AccessTier::from_stored(Some("   ")), AccessTier::Free);
    }

    #[test]
    fn unknown_stored_tier_defaults_to_free() {
        assert_eq!(AccessTier::from_stored(Some("premium")), AccessTier::Free);
    }

    #[test]
    fn stored_tier_is_case_insensitive() {
        assert_eq!(AccessTier::from_stored(Some("Paid")), AccessTier::Paid);
        assert_eq!(
            AccessTier::from_stored(Some("SUBSCRIPTION")),
            AccessTier::Subscription
        );
    }

    #[test]
    fn access_tier_from_str_is_strict() {
        assert_eq!("free".parse::<AccessTier>().unwrap(), AccessTier::Free);
        assert_eq!("paid".parse::<AccessTier>().unwrap(), AccessTier::Paid);
        assert_eq!(
            "subscription".parse::<AccessTier>().unwrap(),
            AccessTier::Subscription
        );
        assert!("premium".parse::<AccessTier>().is_err());
        assert!("".parse::<AccessTier>().is_err());
    }

    #[test]
    fn access_tier_display() {
        assert_eq!(AccessTier::Free.to_string(), "free");
        assert_eq!(AccessTier::Paid.to_string(), "paid");
        assert_eq!(AccessTier::Subscription.to_string(), "subscription");
    }

    #[test]
    fn access_tier_serde_is_lowercase() {
        let json = serde_json::to_string(&AccessTier::Subscription).unwrap();
        assert_eq!(json, r#""subscription""#);
        let tier: AccessTier = serde_json::from_str(r#""paid""#).unwrap();
        assert_eq!(tier, AccessTier::Paid);
    }

    #[test]
    fn block_reason_messages() {
        assert_eq!(
            BlockReason::NotEnrolled.message(),
            Some("You are not enrolled in this batch")
        );
        assert_eq!(
            BlockReason::SubscriptionRequired.message(),
            Some("This content requires an active subscription")
        );
        assert_eq!(
            BlockReason::PurchaseRequired.message(),
            Some("This content requires course purchase")
        );
        assert_eq!(BlockReason::None.message(), None);
    }

    #[test]
    fn block_reason_serde_is_snake_case() {
        let json = serde_json::to_string(&BlockReason::SubscriptionRequired).unwrap();
        assert_eq!(json, r#""subscription_required""#);
        assert_eq!(BlockReason::NotEnrolled.to_string(), "not_enrolled");
    }

    #[test]
    fn only_none_is_unblocked() {
        assert!(!BlockReason::None.is_blocked());
        assert!(BlockReason::NotEnrolled.is_blocked());
        assert!(BlockReason::PurchaseRequired.is_blocked());
        assert!(BlockReason::SubscriptionRequired.is_blocked());
    }
}
