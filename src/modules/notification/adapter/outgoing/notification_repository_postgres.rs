use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::notification::application::domain::entities::Notification;
use crate::modules::notification::application::ports::outgoing::{
    NotificationRecord, NotificationRepository, NotificationRepositoryError,
};

use super::sea_orm_entity::notifications;

fn author_summary(user: users::Model) -> AuthorSummary {
    AuthorSummary {
        id: user.id,
        username: user.username,
        avatar: user.avatar,
        role: Role::parse(&user.role),
    }
}

#[derive(Clone, Debug)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn triggerer_of(
        &self,
        triggerer_id: Option<Uuid>,
    ) -> Result<Option<AuthorSummary>, NotificationRepositoryError> {
        let Some(triggerer_id) = triggerer_id else {
            return Ok(None);
        };
        users::Entity::find_by_id(triggerer_id)
            .one(&*self.db)
            .await
            .map(|user| user.map(author_summary))
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn create(
        &self,
        notification: Notification,
    ) -> Result<NotificationRecord, NotificationRepositoryError> {
        let row = notifications::ActiveModel {
            id: Set(notification.id),
            notification_type: Set(notification.notification_type.as_str().to_string()),
            message: Set(notification.message.clone()),
            recipient_id: Set(notification.recipient_id),
            triggerer_id: Set(notification.triggerer_id),
            post_id: Set(notification.post_id),
            comment_id: Set(notification.comment_id),
            read: Set(notification.read),
            created_at: Set(notification.created_at.into()),
        };

        let created = row
            .insert(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;
        let triggerer = self.triggerer_of(created.triggerer_id).await?;

        Ok(NotificationRecord {
            notification: created.into(),
            triggerer,
        })
    }

    async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
    ) -> Result<Vec<NotificationRecord>, NotificationRepositoryError> {
        let rows = notifications::Entity::find()
            .filter(notifications::Column::RecipientId.eq(recipient_id))
            .order_by_desc(notifications::Column::CreatedAt)
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(model, triggerer)| NotificationRecord {
                notification: model.into(),
                triggerer: triggerer.map(author_summary),
            })
            .collect())
    }

    async fn unread_count(
        &self,
        recipient_id: Uuid,
    ) -> Result<u64, NotificationRepositoryError> {
        notifications::Entity::find()
            .filter(notifications::Column::RecipientId.eq(recipient_id))
            .filter(notifications::Column::Read.eq(false))
            .count(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Notification>, NotificationRepositoryError> {
        notifications::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map(|model| model.map(Into::into))
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), NotificationRepositoryError> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::Read, sea_orm::sea_query::Expr::value(true))
            .filter(notifications::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(NotificationRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn mark_all_read(
        &self,
        recipient_id: Uuid,
    ) -> Result<(), NotificationRepositoryError> {
        notifications::Entity::update_many()
            .col_expr(notifications::Column::Read, sea_orm::sea_query::Expr::value(true))
            .filter(notifications::Column::RecipientId.eq(recipient_id))
            .filter(notifications::Column::Read.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), NotificationRepositoryError> {
        let result = notifications::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(NotificationRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_all(&self, recipient_id: Uuid) -> Result<(), NotificationRepositoryError> {
        notifications::Entity::delete_many()
            .filter(notifications::Column::RecipientId.eq(recipient_id))
            .exec(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
