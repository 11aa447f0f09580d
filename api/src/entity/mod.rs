//! SeaORM entities
//!
//! Table mappings for the platform tables this service reads.
//! Only the columns used for access checks are mapped.

pub mod live_sessions;
pub mod user_batches;
pub mod user_roles;
pub mod videos;
