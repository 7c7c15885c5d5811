use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::vote::application::domain::entities::VoteSummary;

pub const MAX_COMMENT_LENGTH: usize = 500;

/// How many direct replies ride along with each top-level comment on list
/// pages. The full set is available through the single-comment endpoint.
pub const REPLY_PREVIEW_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub content: String,
    pub author: AuthorSummary,
    pub post_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(flatten)]
    pub votes: VoteSummary,
    pub replies: Vec<CommentView>,
    pub reply_count: u64,
    pub created_at: DateTime<Utc>,
}
