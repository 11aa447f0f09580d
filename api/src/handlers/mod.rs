//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod access;
pub mod roles;

pub use access::{check_live_access, check_video_access};
pub use roles::can_manage_live_sessions;
