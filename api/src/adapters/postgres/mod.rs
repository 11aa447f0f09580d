//! PostgreSQL adapters
//!
//! Implementations of core port traits using SeaORM and PostgreSQL.

pub mod content_repo;
pub mod facts_provider;
pub mod role_repo;

#[cfg(test)]
mod integration_tests;

pub use content_repo::PostgresContentRepository;
pub use facts_provider::PostgresFactsProvider;
pub use role_repo::PostgresRoleRepository;
