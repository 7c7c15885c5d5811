use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::comment::application::domain::entities::{
    Comment, CommentView, MAX_COMMENT_LENGTH,
};
use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentRepository};
use crate::modules::notification::application::domain::entities::NotificationType;
use crate::modules::notification::application::ports::incoming::{
    INotifyUseCase, NotifyCommand,
};
use crate::modules::post::application::ports::outgoing::PostQuery;
use crate::modules::vote::application::domain::entities::VoteSummary;
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Comment must be between 1 and {MAX_COMMENT_LENGTH} characters")]
    InvalidContent,

    #[error("Post not found")]
    PostNotFound,

    #[error("Parent comment not found")]
    ParentNotFound,

    #[error("A reply cannot target a comment on another post")]
    ParentPostMismatch,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    content: String,
    post_id: Uuid,
    parent_id: Option<Uuid>,
}

impl CreateCommentCommand {
    pub fn new(
        content: String,
        post_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> Result<Self, CreateCommentError> {
        let content = content.trim().to_string();
        if content.is_empty() || content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(CreateCommentError::InvalidContent);
        }

        Ok(Self {
            content,
            post_id,
            parent_id,
        })
    }
}

#[async_trait]
pub trait ICreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        author_id: Uuid,
        command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError>;
}

pub struct CreateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
    posts: Arc<dyn PostQuery>,
    users: Arc<dyn UserQuery>,
    notifier: Arc<dyn INotifyUseCase>,
    event_bus: Arc<dyn EventBus>,
}

impl<Q, R> CreateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        posts: Arc<dyn PostQuery>,
        users: Arc<dyn UserQuery>,
        notifier: Arc<dyn INotifyUseCase>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            query,
            repository,
            posts,
            users,
            notifier,
            event_bus,
        }
    }

    /// Replies notify the parent comment's author, top-level comments the
    /// post's author. The comment is already committed; failures here are
    /// logged and dropped.
    async fn notify(
        &self,
        author_name: &str,
        comment: &Comment,
        recipient_id: Uuid,
        is_reply: bool,
    ) {
        let (notification_type, message) = if is_reply {
            (
                NotificationType::CommentReply,
                format!("{} replied to your comment", author_name),
            )
        } else {
            (
                NotificationType::PostComment,
                format!("{} commented on your post", author_name),
            )
        };

        let command = NotifyCommand {
            notification_type,
            recipient_id,
            triggerer_id: Some(comment.author_id),
            message,
            post_id: Some(comment.post_id),
            comment_id: Some(comment.id),
        };

        if let Err(e) = self.notifier.execute(command).await {
            tracing::warn!("Comment notification failed for {}: {}", comment.id, e);
        }
    }
}

#[async_trait]
impl<Q, R> ICreateCommentUseCase for CreateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    async fn execute(
        &self,
        author_id: Uuid,
        command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError> {
        let author = self
            .users
            .find_by_id(author_id)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::AuthorNotFound)?;

        let post = self
            .posts
            .find_by_id(command.post_id)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::PostNotFound)?;

        let parent = match command.parent_id {
            Some(parent_id) => {
                let parent = self
                    .query
                    .find_by_id(parent_id)
                    .await
                    .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
                    .ok_or(CreateCommentError::ParentNotFound)?;
                if parent.post_id != command.post_id {
                    return Err(CreateCommentError::ParentPostMismatch);
                }
                Some(parent)
            }
            None => None,
        };

        let comment = Comment {
            id: Uuid::new_v4(),
            content: command.content,
            author_id,
            post_id: command.post_id,
            parent_id: command.parent_id,
            created_at: Utc::now(),
        };

        let created = self
            .repository
            .create_comment(comment)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?;

        let view = CommentView {
            id: created.id,
            content: created.content.clone(),
            author: AuthorSummary::from(&author),
            post_id: created.post_id,
            parent_id: created.parent_id,
            votes: VoteSummary::default(),
            replies: Vec::new(),
            reply_count: 0,
            created_at: created.created_at,
        };

        self.event_bus.publish(ForumEvent::global(
            "commentCreated",
            serde_json::to_value(&view)
                .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?,
        ));

        match parent {
            Some(parent) => {
                self.notify(&author.username, &created, parent.author_id, true)
                    .await
            }
            None => {
                self.notify(&author.username, &created, post.author_id, false)
                    .await
            }
        }

        Ok(view)
    }
}
