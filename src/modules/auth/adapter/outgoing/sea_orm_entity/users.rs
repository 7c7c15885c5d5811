use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub role: String,
    pub reputation: i32,
    pub email_verified: bool,
    pub verification_token: Option<String>,
    pub token_expires_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            avatar: model.avatar,
            bio: model.bio,
            role: Role::parse(&model.role),
            reputation: model.reputation,
            email_verified: model.email_verified,
            verification_token: model.verification_token,
            token_expires_at: model.token_expires_at.map(|t| t.into()),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
