use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::CommentView;
use crate::modules::comment::application::ports::outgoing::CommentQuery;
use crate::modules::comment::application::services::list_comments::enrich_comments;
use crate::modules::vote::application::ports::outgoing::VoteAggregator;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchCommentUseCase: Send + Sync {
    /// Single comment with its full reply set, enriched.
    async fn execute(
        &self,
        comment_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<CommentView, FetchCommentError>;
}

pub struct FetchCommentService<Q>
where
    Q: CommentQuery,
{
    query: Q,
    votes: Arc<dyn VoteAggregator>,
}

impl<Q> FetchCommentService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q, votes: Arc<dyn VoteAggregator>) -> Self {
        Self { query, votes }
    }
}

#[async_trait]
impl<Q> IFetchCommentUseCase for FetchCommentService<Q>
where
    Q: CommentQuery,
{
    async fn execute(
        &self,
        comment_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<CommentView, FetchCommentError> {
        let comment = self
            .query
            .find_by_id(comment_id)
            .await
            .map_err(|e| FetchCommentError::QueryError(e.to_string()))?
            .ok_or(FetchCommentError::CommentNotFound)?;

        let mut views = enrich_comments(&self.query, &self.votes, vec![comment], viewer, None)
            .await
            .map_err(FetchCommentError::QueryError)?;

        views.pop().ok_or(FetchCommentError::CommentNotFound)
    }
}
