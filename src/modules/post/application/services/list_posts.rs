use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::post::application::domain::entities::{
    Paginated, Post, PostFilter, PostView,
};
use crate::modules::post::application::ports::outgoing::PostQuery;
use crate::modules::vote::application::domain::entities::TargetKind;
use crate::modules::vote::application::ports::outgoing::VoteAggregator;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PostFilter,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<PostView>, ListPostsError>;
}

pub struct ListPostsService<Q>
where
    Q: PostQuery,
{
    query: Q,
    votes: Arc<dyn VoteAggregator>,
}

impl<Q> ListPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q, votes: Arc<dyn VoteAggregator>) -> Self {
        Self { query, votes }
    }

    /// Fills in authors, tags, comment counts, vote aggregates and the
    /// viewer's bookmarks for a page of posts. Every lookup is batched,
    /// so the query count does not grow with the page size.
    pub(crate) async fn enrich(
        &self,
        posts: Vec<Post>,
        viewer: Option<Uuid>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();

        let authors = self
            .query
            .authors(&author_ids)
            .await
            .map_err(|e| ListPostsError::QueryError(e.to_string()))?;
        let tags = self
            .query
            .tags_for(&post_ids)
            .await
            .map_err(|e| ListPostsError::QueryError(e.to_string()))?;
        let comment_counts = self
            .query
            .comment_counts(&post_ids)
            .await
            .map_err(|e| ListPostsError::QueryError(e.to_string()))?;
        let votes = self
            .votes
            .summaries(TargetKind::Post, &post_ids, viewer)
            .await
            .map_err(|e| ListPostsError::QueryError(e.to_string()))?;
        let bookmarked = match viewer {
            Some(viewer) => self
                .query
                .bookmarked_among(viewer, &post_ids)
                .await
                .map_err(|e| ListPostsError::QueryError(e.to_string()))?,
            None => Default::default(),
        };

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.author_id).cloned().unwrap_or_else(|| {
                    AuthorSummary {
                        id: post.author_id,
                        username: "deleted".to_string(),
                        avatar: None,
                        role: Role::User,
                    }
                });
                PostView {
                    author,
                    tags: tags.get(&post.id).cloned().unwrap_or_default(),
                    votes: votes.get(&post.id).copied().unwrap_or_default(),
                    comment_count: comment_counts.get(&post.id).copied().unwrap_or(0),
                    is_bookmarked: bookmarked.contains(&post.id),
                    id: post.id,
                    title: post.title,
                    content: None,
                    excerpt: post.excerpt,
                    created_at: post.created_at,
                }
            })
            .collect())
    }
}

#[async_trait]
impl<Q> IListPostsUseCase for ListPostsService<Q>
where
    Q: PostQuery,
{
    async fn execute(
        &self,
        filter: PostFilter,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<PostView>, ListPostsError> {
        let (posts, total) = self
            .query
            .list(&filter)
            .await
            .map_err(|e| ListPostsError::QueryError(e.to_string()))?;

        let items = self.enrich(posts, viewer).await?;
        Ok(Paginated::new(items, total, filter.page, filter.per_page))
    }
}
