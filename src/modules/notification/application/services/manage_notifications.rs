use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::notification::application::domain::entities::NotificationView;
use crate::modules::notification::application::ports::outgoing::{
    NotificationRepository, NotificationRepositoryError,
};
use crate::modules::notification::application::services::notify::view_of;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageNotificationError {
    #[error("Notification not found")]
    NotFound,

    #[error("Notification belongs to another user")]
    Forbidden,

    #[error("Store failure: {0}")]
    StoreFailure(String),
}

impl From<NotificationRepositoryError> for ManageNotificationError {
    fn from(e: NotificationRepositoryError) -> Self {
        match e {
            NotificationRepositoryError::NotFound => ManageNotificationError::NotFound,
            NotificationRepositoryError::DatabaseError(msg) => {
                ManageNotificationError::StoreFailure(msg)
            }
        }
    }
}

/// Recipient-owned notification reads and mutations. Every per-id
/// operation fails closed when the caller is not the recipient.
#[async_trait]
pub trait IManageNotificationsUseCase: Send + Sync {
    async fn list(&self, caller: Uuid) -> Result<Vec<NotificationView>, ManageNotificationError>;
    async fn unread_count(&self, caller: Uuid) -> Result<u64, ManageNotificationError>;
    async fn mark_read(&self, caller: Uuid, id: Uuid) -> Result<(), ManageNotificationError>;
    async fn mark_all_read(&self, caller: Uuid) -> Result<(), ManageNotificationError>;
    async fn delete(&self, caller: Uuid, id: Uuid) -> Result<(), ManageNotificationError>;
    async fn delete_all(&self, caller: Uuid) -> Result<(), ManageNotificationError>;
}

pub struct ManageNotificationsService<R>
where
    R: NotificationRepository,
{
    repository: R,
}

impl<R> ManageNotificationsService<R>
where
    R: NotificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn owned_by(&self, caller: Uuid, id: Uuid) -> Result<(), ManageNotificationError> {
        let notification = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ManageNotificationError::NotFound)?;

        if notification.recipient_id != caller {
            return Err(ManageNotificationError::Forbidden);
        }
        Ok(())
    }
}

#[async_trait]
impl<R> IManageNotificationsUseCase for ManageNotificationsService<R>
where
    R: NotificationRepository,
{
    async fn list(&self, caller: Uuid) -> Result<Vec<NotificationView>, ManageNotificationError> {
        let records = self.repository.list_for_recipient(caller).await?;
        Ok(records.iter().map(view_of).collect())
    }

    async fn unread_count(&self, caller: Uuid) -> Result<u64, ManageNotificationError> {
        Ok(self.repository.unread_count(caller).await?)
    }

    async fn mark_read(&self, caller: Uuid, id: Uuid) -> Result<(), ManageNotificationError> {
        self.owned_by(caller, id).await?;
        Ok(self.repository.mark_read(id).await?)
    }

    async fn mark_all_read(&self, caller: Uuid) -> Result<(), ManageNotificationError> {
        Ok(self.repository.mark_all_read(caller).await?)
    }

    async fn delete(&self, caller: Uuid, id: Uuid) -> Result<(), ManageNotificationError> {
        self.owned_by(caller, id).await?;
        Ok(self.repository.delete(id).await?)
    }

    async fn delete_all(&self, caller: Uuid) -> Result<(), ManageNotificationError> {
        Ok(self.repository.delete_all(caller).await?)
    }
}
