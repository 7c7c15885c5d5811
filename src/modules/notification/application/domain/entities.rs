use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;

/// Server-side event that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    PostVote,
    CommentVote,
    CommentReply,
    PostComment,
    PostSaved,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::PostVote => "post_vote",
            NotificationType::CommentVote => "comment_vote",
            NotificationType::CommentReply => "comment_reply",
            NotificationType::PostComment => "post_comment",
            NotificationType::PostSaved => "post_saved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "post_vote" => Some(NotificationType::PostVote),
            "comment_vote" => Some(NotificationType::CommentVote),
            "comment_reply" => Some(NotificationType::CommentReply),
            "post_comment" => Some(NotificationType::PostComment),
            "post_saved" => Some(NotificationType::PostSaved),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub notification_type: NotificationType,
    pub message: String,
    pub recipient_id: Uuid,
    pub triggerer_id: Option<Uuid>,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Client-facing notification, triggerer resolved to a summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub message: String,
    pub triggerer: Option<AuthorSummary>,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
