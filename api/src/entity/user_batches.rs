use sea_orm::entity::prelude::*;

/// One row per (user, batch) enrollment
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_batches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub batch_id: Option<Uuid>,
    pub has_purchased: Option<bool>,
    pub has_subscription: Option<bool>,
    pub enrollment_date: Option<DateTimeWithTimeZone>,
    pub access_expiry_date: Option<DateTimeWithTimeZone>,
    pub grace_period_end_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
