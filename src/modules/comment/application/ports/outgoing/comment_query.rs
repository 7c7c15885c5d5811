use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError>;

    /// Page of top-level comments for a post, newest first, plus the
    /// total top-level count.
    async fn top_level_for_post(
        &self,
        post_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), CommentQueryError>;

    /// Every top-level comment for a post, newest first.
    async fn all_top_level_for_post(
        &self,
        post_id: Uuid,
    ) -> Result<Vec<Comment>, CommentQueryError>;

    /// Direct replies for each parent, oldest first within a parent.
    async fn replies_for(
        &self,
        parent_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Comment>>, CommentQueryError>;

    async fn authors(
        &self,
        author_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, AuthorSummary>, CommentQueryError>;
}
