use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Parent comment not found")]
    ParentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: Comment) -> Result<Comment, CommentRepositoryError>;

    /// Deletes the comment together with its direct replies and the votes
    /// attached to either. Replies do not nest further than one level.
    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
}
