use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map(|model| model.map(Into::into))
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map(|model| model.map(Into::into))
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map(|model| model.map(Into::into))
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}
