use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::report::application::domain::entities::{Report, ReportStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub reason: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub reporter_id: Uuid,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::ReporterId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Reporter,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reporter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Report {
    fn from(model: Model) -> Self {
        Report {
            id: model.id,
            reason: model.reason,
            details: model.details,
            reporter_id: model.reporter_id,
            post_id: model.post_id,
            comment_id: model.comment_id,
            status: ReportStatus::parse(&model.status),
            created_at: model.created_at.into(),
        }
    }
}
