//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the entitlement evaluator.

pub mod access_service;

pub use access_service::{AccessCheck, AccessService};
