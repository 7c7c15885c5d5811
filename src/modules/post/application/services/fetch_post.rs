use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::comment::application::domain::entities::CommentView;
use crate::modules::comment::application::ports::incoming::ICommentTreeUseCase;
use crate::modules::post::application::domain::entities::PostView;
use crate::modules::post::application::ports::outgoing::PostQuery;
use crate::modules::vote::application::domain::entities::VoteTarget;
use crate::modules::vote::application::ports::outgoing::VoteAggregator;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchPostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailView {
    #[serde(flatten)]
    pub post: PostView,
    pub comments: Vec<CommentView>,
}

#[async_trait]
pub trait IFetchPostUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<PostDetailView, FetchPostError>;
}

pub struct FetchPostService<Q>
where
    Q: PostQuery,
{
    query: Q,
    votes: Arc<dyn VoteAggregator>,
    comments: Arc<dyn ICommentTreeUseCase>,
}

impl<Q> FetchPostService<Q>
where
    Q: PostQuery,
{
    pub fn new(
        query: Q,
        votes: Arc<dyn VoteAggregator>,
        comments: Arc<dyn ICommentTreeUseCase>,
    ) -> Self {
        Self {
            query,
            votes,
            comments,
        }
    }
}

#[async_trait]
impl<Q> IFetchPostUseCase for FetchPostService<Q>
where
    Q: PostQuery,
{
    async fn execute(
        &self,
        post_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<PostDetailView, FetchPostError> {
        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| FetchPostError::QueryError(e.to_string()))?
            .ok_or(FetchPostError::PostNotFound)?;

        let authors = self
            .query
            .authors(&[post.author_id])
            .await
            .map_err(|e| FetchPostError::QueryError(e.to_string()))?;
        let author = authors
            .get(&post.author_id)
            .cloned()
            .unwrap_or_else(|| AuthorSummary {
                id: post.author_id,
                username: "deleted".to_string(),
                avatar: None,
                role: Role::User,
            });

        let tags = self
            .query
            .tags_for(&[post.id])
            .await
            .map_err(|e| FetchPostError::QueryError(e.to_string()))?
            .remove(&post.id)
            .unwrap_or_default();

        let comment_count = self
            .query
            .comment_counts(&[post.id])
            .await
            .map_err(|e| FetchPostError::QueryError(e.to_string()))?
            .get(&post.id)
            .copied()
            .unwrap_or(0);

        let votes = self
            .votes
            .summary(VoteTarget::post(post.id), viewer)
            .await
            .map_err(|e| FetchPostError::QueryError(e.to_string()))?;

        let is_bookmarked = match viewer {
            Some(viewer) => self
                .query
                .bookmarked_among(viewer, &[post.id])
                .await
                .map_err(|e| FetchPostError::QueryError(e.to_string()))?
                .contains(&post.id),
            None => false,
        };

        let comments = self
            .comments
            .tree(post.id, viewer)
            .await
            .map_err(|e| FetchPostError::QueryError(e.to_string()))?;

        Ok(PostDetailView {
            post: PostView {
                id: post.id,
                title: post.title,
                content: Some(post.content),
                excerpt: post.excerpt,
                author,
                tags,
                votes,
                comment_count,
                is_bookmarked,
                created_at: post.created_at,
            },
            comments,
        })
    }
}
