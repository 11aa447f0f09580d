//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for content, enrollment facts and roles
//! - `entitlement`: The access rules evaluated against those models
//! - `ports`: Trait definitions for external dependencies

pub mod entitlement;
pub mod entities;
pub mod ports;
