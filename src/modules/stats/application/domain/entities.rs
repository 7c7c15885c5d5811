use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStats {
    pub total_posts: u64,
    pub total_users: u64,
    pub posts_today: u64,
    /// Users who posted or commented within the last 7 days.
    pub active_users: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularTag {
    pub name: String,
    pub post_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Post,
    Comment,
}

/// One entry in the merged recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub id: Uuid,
    pub post_id: Uuid,
    pub title: String,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}
