use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::notification::application::domain::entities::Notification;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Notification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Notification row joined with its triggerer, when one exists.
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub notification: Notification,
    pub triggerer: Option<AuthorSummary>,
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(
        &self,
        notification: Notification,
    ) -> Result<NotificationRecord, NotificationRepositoryError>;

    /// Newest first.
    async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
    ) -> Result<Vec<NotificationRecord>, NotificationRepositoryError>;

    async fn unread_count(&self, recipient_id: Uuid)
        -> Result<u64, NotificationRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Notification>, NotificationRepositoryError>;

    async fn mark_read(&self, id: Uuid) -> Result<(), NotificationRepositoryError>;

    async fn mark_all_read(&self, recipient_id: Uuid)
        -> Result<(), NotificationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), NotificationRepositoryError>;

    async fn delete_all(&self, recipient_id: Uuid) -> Result<(), NotificationRepositoryError>;
}
