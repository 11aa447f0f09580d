//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit testing.
//! Available to this crate's tests and, through the `test-utils` feature,
//! to other workspace crates.
//!
//! The in-memory ports hold fixed data and can be switched into a failing mode.
//! Tests that need call-count expectations use mockall instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
