//! PostgreSQL adapter for FactsProvider

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use coursegate_core::domain::ports::FactsProvider;
use coursegate_core::{BatchId, CourseId, DomainError, EnrollmentFacts, UserId};

use crate::entity::user_batches;

/// Reads enrollment facts from `user_batches`
pub struct PostgresFactsProvider {
    db: DatabaseConnection,
}

impl PostgresFactsProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_utc(ts: Option<sea_orm::prelude::DateTimeWithTimeZone>) -> Option<DateTime<Utc>> {
    ts.map(|t| t.with_timezone(&Utc))
}

/// Facts for an existing enrollment row
fn facts_from_row(
    row: user_batches::Model,
    user_id: UserId,
    course_id: CourseId,
    batch_id: BatchId,
) -> EnrollmentFacts {
    EnrollmentFacts {
        enrollment_date: to_utc(row.enrollment_date),
        access_expiry_date: to_utc(row.access_expiry_date),
        grace_period_end_date: to_utc(row.grace_period_end_date),
        ..EnrollmentFacts::enrolled(user_id, course_id, batch_id)
            .with_purchase(row.has_purchased.unwrap_or(false))
            .with_subscription(row.has_subscription.unwrap_or(false))
    }
}

#[async_trait]
impl FactsProvider for PostgresFactsProvider {
    async fn fetch_facts(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
        batch_id: &BatchId,
    ) -> Result<EnrollmentFacts, DomainError> {
        let row = user_batches::Entity::find()
            .filter(user_batches::Column::UserId.eq(user_id.0))
            .filter(user_batches::Column::BatchId.eq(batch_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(match row {
            Some(row) => facts_from_row(row, *user_id, *course_id, *batch_id),
            None => EnrollmentFacts::not_enrolled(*user_id, *course_id, *batch_id),
        })
    }
}
