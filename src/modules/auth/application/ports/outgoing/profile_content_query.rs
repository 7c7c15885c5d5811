use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::VoteSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileContentError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Post as it appears on a public profile. `votes` starts zeroed and is
/// filled in by the enrichment step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub votes: VoteSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileComment {
    pub id: Uuid,
    pub content: String,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileContent {
    pub posts: Vec<ProfilePost>,
    pub comments: Vec<ProfileComment>,
    pub saved_posts: Vec<ProfilePost>,
    pub vote_count: u64,
    pub report_count: u64,
}

/// Everything a public profile shows besides the account itself.
#[async_trait]
pub trait ProfileContentQuery: Send + Sync {
    async fn content_for(&self, user_id: Uuid) -> Result<ProfileContent, ProfileContentError>;
}
