use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::post::application::domain::entities::{Post, PostFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side for the post feed. Enrichment lookups are batch-shaped so a
/// page of any size costs a fixed number of queries.
#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError>;

    /// Filtered, sorted page of posts plus the total match count.
    async fn list(&self, filter: &PostFilter) -> Result<(Vec<Post>, u64), PostQueryError>;

    async fn authors(
        &self,
        author_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, AuthorSummary>, PostQueryError>;

    async fn tags_for(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<String>>, PostQueryError>;

    async fn comment_counts(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, u64>, PostQueryError>;

    /// Which of `post_ids` the viewer has bookmarked.
    async fn bookmarked_among(
        &self,
        viewer: Uuid,
        post_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>, PostQueryError>;
}
