use async_trait::async_trait;
use std::time::Duration;

use crate::modules::stats::application::domain::entities::{
    ActivityItem, CommunityStats, PopularTag,
};
use crate::modules::stats::application::ports::outgoing::{StatsQuery, StatsQueryError};
use crate::shared::cache::TtlCache;

pub const STATS_CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<StatsQueryError> for StatsError {
    fn from(error: StatsQueryError) -> Self {
        StatsError::QueryError(error.to_string())
    }
}

#[async_trait]
pub trait IStatsUseCase: Send + Sync {
    async fn community_stats(&self) -> Result<CommunityStats, StatsError>;
    async fn popular_tags(&self, limit: u64) -> Result<Vec<PopularTag>, StatsError>;
    async fn recent_activity(&self, limit: u64) -> Result<Vec<ActivityItem>, StatsError>;
}

pub struct StatsService<Q>
where
    Q: StatsQuery,
{
    query: Q,
    community: TtlCache<(), CommunityStats>,
    tags: TtlCache<u64, Vec<PopularTag>>,
    activity: TtlCache<u64, Vec<ActivityItem>>,
}

impl<Q> StatsService<Q>
where
    Q: StatsQuery,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            community: TtlCache::new(STATS_CACHE_TTL),
            tags: TtlCache::new(STATS_CACHE_TTL),
            activity: TtlCache::new(STATS_CACHE_TTL),
        }
    }
}

#[async_trait]
impl<Q> IStatsUseCase for StatsService<Q>
where
    Q: StatsQuery,
{
    async fn community_stats(&self) -> Result<CommunityStats, StatsError> {
        self.community
            .get_or_insert_with((), || async {
                Ok::<_, StatsError>(self.query.community_stats().await?)
            })
            .await
    }

    async fn popular_tags(&self, limit: u64) -> Result<Vec<PopularTag>, StatsError> {
        self.tags
            .get_or_insert_with(limit, || async {
                Ok::<_, StatsError>(self.query.popular_tags(limit).await?)
            })
            .await
    }

    async fn recent_activity(&self, limit: u64) -> Result<Vec<ActivityItem>, StatsError> {
        self.activity
            .get_or_insert_with(limit, || async {
                let mut items = self.query.recent_posts(limit).await?;
                items.extend(self.query.recent_comments(limit).await?);
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                items.truncate(limit as usize);
                Ok::<_, StatsError>(items)
            })
            .await
    }
}
