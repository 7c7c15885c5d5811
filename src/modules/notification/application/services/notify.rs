use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::notification::application::domain::entities::{
    Notification, NotificationView,
};
use crate::modules::notification::application::ports::incoming::{
    INotifyUseCase, NotifyCommand, NotifyError,
};
use crate::modules::notification::application::ports::outgoing::{
    NotificationRecord, NotificationRepository,
};
use crate::shared::realtime::{EventBus, ForumEvent};

pub struct NotifyService<R>
where
    R: NotificationRepository,
{
    repository: R,
    event_bus: Arc<dyn EventBus>,
}

impl<R> NotifyService<R>
where
    R: NotificationRepository,
{
    pub fn new(repository: R, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }
}

pub(crate) fn view_of(record: &NotificationRecord) -> NotificationView {
    NotificationView {
        id: record.notification.id,
        notification_type: record.notification.notification_type,
        message: record.notification.message.clone(),
        triggerer: record.triggerer.clone(),
        post_id: record.notification.post_id,
        comment_id: record.notification.comment_id,
        read: record.notification.read,
        created_at: record.notification.created_at,
    }
}

#[async_trait]
impl<R> INotifyUseCase for NotifyService<R>
where
    R: NotificationRepository,
{
    async fn execute(
        &self,
        command: NotifyCommand,
    ) -> Result<Option<NotificationView>, NotifyError> {
        // Self-triggered events produce no row and no push.
        if command.triggerer_id == Some(command.recipient_id) {
            return Ok(None);
        }

        let notification = Notification {
            id: Uuid::new_v4(),
            notification_type: command.notification_type,
            message: command.message,
            recipient_id: command.recipient_id,
            triggerer_id: command.triggerer_id,
            post_id: command.post_id,
            comment_id: command.comment_id,
            read: false,
            created_at: chrono::Utc::now(),
        };

        let record = self
            .repository
            .create(notification)
            .await
            .map_err(|e| NotifyError::StoreFailure(e.to_string()))?;

        let view = view_of(&record);
        match serde_json::to_value(&view) {
            Ok(payload) => {
                self.event_bus.publish(ForumEvent::for_user(
                    record.notification.recipient_id,
                    "notification",
                    payload,
                ));
            }
            Err(e) => {
                tracing::warn!("Could not serialize notification for push: {}", e);
            }
        }

        Ok(Some(view))
    }
}
