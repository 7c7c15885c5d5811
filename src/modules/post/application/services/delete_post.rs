use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::ports::outgoing::{PostQuery, PostRepository};
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Only the author can delete this post")]
    NotAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeletePostUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DeletePostError>;
}

pub struct DeletePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    query: Q,
    repository: R,
    event_bus: Arc<dyn EventBus>,
}

impl<Q, R> DeletePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
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
impl<Q, R> IDeletePostUseCase for DeletePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    async fn execute(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DeletePostError> {
        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::PostNotFound)?;

        if post.author_id != user_id {
            return Err(DeletePostError::NotAuthor);
        }

        self.repository
            .delete_post(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?;

        self.event_bus.publish(ForumEvent::global(
            "postDeleted",
            serde_json::json!({ "postId": post_id }),
        ));

        Ok(())
    }
}
