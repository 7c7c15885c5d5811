use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthorSummary;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::post::application::domain::entities::{
    excerpt_of, Post, PostView, MAX_TAGS_PER_POST,
};
use crate::modules::post::application::ports::outgoing::PostRepository;
use crate::modules::vote::application::domain::entities::VoteSummary;
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Title must be between 2 and 200 characters")]
    InvalidTitle,

    #[error("Content must be at least 10 characters")]
    InvalidContent,

    #[error("A post can carry at most {MAX_TAGS_PER_POST} tags")]
    TooManyTags,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    title: String,
    content: String,
    tags: Vec<String>,
}

impl CreatePostCommand {
    pub fn new(
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> Result<Self, CreatePostError> {
        let title = title.trim().to_string();
        if title.chars().count() < 2 || title.chars().count() > 200 {
            return Err(CreatePostError::InvalidTitle);
        }

        let content = content.trim().to_string();
        if content.chars().count() < 10 {
            return Err(CreatePostError::InvalidContent);
        }

        let mut tags: Vec<String> = tags
            .into_iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        tags.dedup();
        if tags.len() > MAX_TAGS_PER_POST {
            return Err(CreatePostError::TooManyTags);
        }

        Ok(Self {
            title,
            content,
            tags,
        })
    }
}

#[async_trait]
pub trait ICreatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        author_id: Uuid,
        command: CreatePostCommand,
    ) -> Result<PostView, CreatePostError>;
}

pub struct CreatePostService<R>
where
    R: PostRepository,
{
    repository: R,
    users: Arc<dyn UserQuery>,
    event_bus: Arc<dyn EventBus>,
}

impl<R> CreatePostService<R>
where
    R: PostRepository,
{
    pub fn new(repository: R, users: Arc<dyn UserQuery>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            repository,
            users,
            event_bus,
        }
    }
}

#[async_trait]
impl<R> ICreatePostUseCase for CreatePostService<R>
where
    R: PostRepository,
{
    async fn execute(
        &self,
        author_id: Uuid,
        command: CreatePostCommand,
    ) -> Result<PostView, CreatePostError> {
        let author = self
            .users
            .find_by_id(author_id)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?
            .ok_or(CreatePostError::AuthorNotFound)?;

        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            excerpt: excerpt_of(&command.content),
            title: command.title,
            content: command.content,
            author_id,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .repository
            .create_post(post, command.tags.clone())
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        let view = PostView {
            id: created.id,
            title: created.title,
            content: Some(created.content),
            excerpt: created.excerpt,
            author: AuthorSummary::from(&author),
            tags: command.tags,
            votes: VoteSummary::default(),
            comment_count: 0,
            is_bookmarked: false,
            created_at: created.created_at,
        };

        self.event_bus.publish(ForumEvent::global(
            "postCreated",
            serde_json::to_value(&view)
                .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?,
        ));

        Ok(view)
    }
}
