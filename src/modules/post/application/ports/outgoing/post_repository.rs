use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persists the post and attaches its tags, creating tag rows that do
    /// not exist yet. Runs in a single transaction.
    async fn create_post(&self, post: Post, tags: Vec<String>)
        -> Result<Post, PostRepositoryError>;

    /// Deletes the post. Comments, votes, saved rows and tag links go with
    /// it through the schema's cascade rules.
    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
