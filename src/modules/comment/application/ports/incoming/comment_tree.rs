use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::CommentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentTreeError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Full one-level comment tree for a post, consumed by the post detail
/// page. Top-level comments newest first, replies oldest first.
#[async_trait]
pub trait ICommentTreeUseCase: Send + Sync {
    async fn tree(
        &self,
        post_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<Vec<CommentView>, CommentTreeError>;
}
