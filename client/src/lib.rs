//! CourseGate client
//!
//! HTTP client front ends (web and mobile shells) use to ask the CourseGate API
//! whether a user may view content. Every failure is reported as a denial.

mod client;

pub use client::AccessClient;
pub use coursegate_core::{AccessCheck, BlockReason, ContentId, PreviewRole, UserId};
