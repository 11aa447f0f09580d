//! Authentication
//!
//! Service-key Bearer authentication for access-check routes.

pub mod api_key;

pub use api_key::{hash_api_key, service_key_middleware};
