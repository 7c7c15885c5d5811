use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::{
    ActivityItem, CommunityStats, PopularTag,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatsQuery: Send + Sync {
    async fn community_stats(&self) -> Result<CommunityStats, StatsQueryError>;

    /// Tags ordered by the number of posts carrying them.
    async fn popular_tags(&self, limit: u64) -> Result<Vec<PopularTag>, StatsQueryError>;

    async fn recent_posts(&self, limit: u64) -> Result<Vec<ActivityItem>, StatsQueryError>;

    async fn recent_comments(&self, limit: u64) -> Result<Vec<ActivityItem>, StatsQueryError>;
}
