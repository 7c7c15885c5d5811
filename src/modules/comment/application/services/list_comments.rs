use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::comment::application::domain::entities::{
    Comment, CommentView, REPLY_PREVIEW_COUNT,
};
use crate::modules::comment::application::ports::incoming::{
    CommentTreeError, ICommentTreeUseCase,
};
use crate::modules::comment::application::ports::outgoing::CommentQuery;
use crate::modules::post::application::domain::entities::Paginated;
use crate::modules::vote::application::domain::entities::{TargetKind, VoteSummary};
use crate::modules::vote::application::ports::outgoing::VoteAggregator;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListCommentsUseCase: Send + Sync {
    /// Top-level comments newest first, each with a bounded reply preview.
    async fn execute(
        &self,
        post_id: Uuid,
        page: u64,
        per_page: u64,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<CommentView>, ListCommentsError>;
}

fn placeholder_author(author_id: Uuid) -> AuthorSummary {
    AuthorSummary {
        id: author_id,
        username: "deleted".to_string(),
        avatar: None,
        role: Role::User,
    }
}

/// Turns raw comment rows into enriched views. `preview` bounds how many
/// replies ride along per parent; `None` keeps the full set. Costs three
/// batched lookups however many comments are passed.
pub(crate) async fn enrich_comments<Q: CommentQuery>(
    query: &Q,
    votes: &Arc<dyn VoteAggregator>,
    parents: Vec<Comment>,
    viewer: Option<Uuid>,
    preview: Option<usize>,
) -> Result<Vec<CommentView>, String> {
    let parent_ids: Vec<Uuid> = parents.iter().map(|c| c.id).collect();

    let mut replies = query
        .replies_for(&parent_ids)
        .await
        .map_err(|e| e.to_string())?;

    let mut author_ids: Vec<Uuid> = parents.iter().map(|c| c.author_id).collect();
    author_ids.extend(replies.values().flatten().map(|c| c.author_id));

    let mut vote_ids = parent_ids.clone();
    vote_ids.extend(replies.values().flatten().map(|c| c.id));

    let authors = query.authors(&author_ids).await.map_err(|e| e.to_string())?;
    let summaries = votes
        .summaries(TargetKind::Comment, &vote_ids, viewer)
        .await
        .map_err(|e| e.to_string())?;

    let view_of = |comment: Comment,
                   replies: Vec<CommentView>,
                   reply_count: u64,
                   authors: &HashMap<Uuid, AuthorSummary>,
                   summaries: &HashMap<Uuid, VoteSummary>| {
        CommentView {
            author: authors
                .get(&comment.author_id)
                .cloned()
                .unwrap_or_else(|| placeholder_author(comment.author_id)),
            votes: summaries.get(&comment.id).copied().unwrap_or_default(),
            replies,
            reply_count,
            id: comment.id,
            content: comment.content,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
        }
    };

    Ok(parents
        .into_iter()
        .map(|parent| {
            let mut children = replies.remove(&parent.id).unwrap_or_default();
            let reply_count = children.len() as u64;
            if let Some(limit) = preview {
                children.truncate(limit);
            }
            let child_views = children
                .into_iter()
                .map(|child| view_of(child, Vec::new(), 0, &authors, &summaries))
                .collect();
            view_of(parent, child_views, reply_count, &authors, &summaries)
        })
        .collect())
}

pub struct ListCommentsService<Q>
where
    Q: CommentQuery,
{
    query: Q,
    votes: Arc<dyn VoteAggregator>,
}

impl<Q> ListCommentsService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q, votes: Arc<dyn VoteAggregator>) -> Self {
        Self { query, votes }
    }
}

#[async_trait]
impl<Q> IListCommentsUseCase for ListCommentsService<Q>
where
    Q: CommentQuery,
{
    async fn execute(
        &self,
        post_id: Uuid,
        page: u64,
        per_page: u64,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<CommentView>, ListCommentsError> {
        let (parents, total) = self
            .query
            .top_level_for_post(post_id, page, per_page)
            .await
            .map_err(|e| ListCommentsError::QueryError(e.to_string()))?;

        let items = enrich_comments(
            &self.query,
            &self.votes,
            parents,
            viewer,
            Some(REPLY_PREVIEW_COUNT),
        )
        .await
        .map_err(ListCommentsError::QueryError)?;

        Ok(Paginated::new(items, total, page, per_page))
    }
}

#[async_trait]
impl<Q> ICommentTreeUseCase for ListCommentsService<Q>
where
    Q: CommentQuery,
{
    async fn tree(
        &self,
        post_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<Vec<CommentView>, CommentTreeError> {
        let parents = self
            .query
            .all_top_level_for_post(post_id)
            .await
            .map_err(|e| CommentTreeError::QueryError(e.to_string()))?;

        enrich_comments(
            &self.query,
            &self.votes,
            parents,
            viewer,
            Some(REPLY_PREVIEW_COUNT),
        )
        .await
        .map_err(CommentTreeError::QueryError)
    }
}
