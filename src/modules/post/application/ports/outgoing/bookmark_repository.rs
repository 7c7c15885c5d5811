use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookmarkRepositoryError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Returns `false` when the bookmark already existed. A concurrent
    /// duplicate insert resolves to `false` through the unique constraint.
    async fn save(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, BookmarkRepositoryError>;

    /// Returns `false` when there was nothing to remove.
    async fn unsave(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, BookmarkRepositoryError>;
}
