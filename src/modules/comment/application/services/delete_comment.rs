use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentRepository};
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Only the author can delete this comment")]
    NotAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteCommentUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, comment_id: Uuid) -> Result<(), DeleteCommentError>;
}

pub struct DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
    event_bus: Arc<dyn EventBus>,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(query: Q, repository: R, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            query,
            repository,
            event_bus,
        }
    }
}

#[async_trait]
impl<Q, R> IDeleteCommentUseCase for DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    async fn execute(&self, user_id: Uuid, comment_id: Uuid) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_by_id(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::CommentNotFound)?;

        if comment.author_id != user_id {
            return Err(DeleteCommentError::NotAuthor);
        }

        self.repository
            .delete_comment(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?;

        self.event_bus.publish(ForumEvent::global(
            "commentDeleted",
            serde_json::json!({ "commentId": comment_id, "postId": comment.post_id }),
        ));

        Ok(())
    }
}
