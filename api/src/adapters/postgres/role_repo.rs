//! PostgreSQL adapter for RoleRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use coursegate_core::domain::ports::RoleRepository;
use coursegate_core::{DomainError, Role, UserId};

use crate::entity::user_roles;

/// PostgreSQL implementation of RoleRepository
pub struct PostgresRoleRepository {
    db: DatabaseConnection,
}

impl PostgresRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn find_roles(&self, user_id: &UserId) -> Result<Vec<Role>, DomainError> {
        let rows = user_roles::Entity::find()
            .filter(user_roles::Column::UserId.eq(user_id.0))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Unknown roles grant nothing
        Ok(rows
            .into_iter()
            .filter_map(|r| match r.role.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::warn!(user_id = %user_id, error = %e, "Ignoring unknown role");
                    None
                }
            })
            .collect())
    }
}
