use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::notification::application::domain::entities::{
    NotificationType, NotificationView,
};

#[derive(Debug, Clone)]
pub struct NotifyCommand {
    pub notification_type: NotificationType,
    pub recipient_id: Uuid,
    pub triggerer_id: Option<Uuid>,
    pub message: String,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("Store failure: {0}")]
    StoreFailure(String),
}

/// Fan-out entry point used by the vote, comment and post modules.
/// Returns `None` when the notification was suppressed because the
/// recipient triggered the event themselves.
#[async_trait]
pub trait INotifyUseCase: Send + Sync {
    async fn execute(&self, command: NotifyCommand) -> Result<Option<NotificationView>, NotifyError>;
}
