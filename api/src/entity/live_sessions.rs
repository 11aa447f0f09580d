use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "live_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub course_id: Option<Uuid>,
    pub batch_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    pub scheduled_start_time: Option<DateTimeWithTimeZone>,
    pub scheduled_end_time: Option<DateTimeWithTimeZone>,
    pub status: Option<String>,
    pub stream_url: Option<String>,
    pub recorded_url: Option<String>,
    pub is_active: Option<bool>,
    pub access_level: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
