use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::notification::application::domain::entities::{
    Notification, NotificationType,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub notification_type: String,
    pub message: String,
    pub recipient_id: Uuid,
    pub triggerer_id: Option<Uuid>,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub read: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::TriggererId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Triggerer,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Triggerer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Notification {
    fn from(model: Model) -> Self {
        Notification {
            id: model.id,
            notification_type: NotificationType::parse(&model.notification_type)
                .unwrap_or(NotificationType::PostComment),
            message: model.message,
            recipient_id: model.recipient_id,
            triggerer_id: model.triggerer_id,
            post_id: model.post_id,
            comment_id: model.comment_id,
            read: model.read,
            created_at: model.created_at.into(),
        }
    }
}
