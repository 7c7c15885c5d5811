use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::outgoing::{
    ProfileChanges, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Username must be between 3 and 20 characters")]
    InvalidUsername,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    changes: ProfileChanges,
}

impl UpdateProfileCommand {
    pub fn new(
        username: Option<String>,
        bio: Option<String>,
        avatar: Option<String>,
    ) -> Result<Self, UpdateProfileError> {
        let username = match username {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.len() < 3 || trimmed.len() > 20 {
                    return Err(UpdateProfileError::InvalidUsername);
                }
                Some(trimmed)
            }
            None => None,
        };

        Ok(Self {
            changes: ProfileChanges {
                username,
                bio,
                avatar,
            },
        })
    }

    pub fn changes(&self) -> &ProfileChanges {
        &self.changes
    }
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<UserView, UpdateProfileError>;
}

pub struct UpdateProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    event_bus: Arc<dyn EventBus>,
}

impl<Q, R> UpdateProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
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
impl<Q, R> IUpdateProfileUseCase for UpdateProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<UserView, UpdateProfileError> {
        if let Some(wanted) = &command.changes.username {
            let holder = self
                .query
                .find_by_username(wanted)
                .await
                .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?;
            if let Some(existing) = holder {
                if existing.id != user_id {
                    return Err(UpdateProfileError::UsernameAlreadyExists);
                }
            }
        }

        let updated = self
            .repository
            .update_profile(user_id, command.changes)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        let view = UserView::from(&updated);
        match serde_json::to_value(&view) {
            Ok(payload) => {
                self.event_bus
                    .publish(ForumEvent::global("userProfileUpdated", payload));
            }
            Err(e) => tracing::warn!("Could not serialize profile update event: {}", e),
        }

        Ok(view)
    }
}
