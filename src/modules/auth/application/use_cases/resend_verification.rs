use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::modules::auth::application::use_cases::register_user::generate_verification_token;
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;

const VERIFICATION_TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResendVerificationError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("Email sending failed: {0}")]
    EmailSendFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResendVerificationUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError>;
}

pub struct ResendVerificationService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> ResendVerificationService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, email_notifier: Arc<dyn UserEmailNotifier>) -> Self {
        Self {
            query,
            repository,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IResendVerificationUseCase for ResendVerificationService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError> {
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| ResendVerificationError::RepositoryError(e.to_string()))?
            .ok_or(ResendVerificationError::UserNotFound)?;

        if user.email_verified {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        // Always rotate; a fresh token invalidates any earlier one.
        let token = generate_verification_token();
        self.repository
            .set_verification_token(
                user.id,
                token.clone(),
                Utc::now() + Duration::seconds(VERIFICATION_TOKEN_TTL_SECONDS),
            )
            .await
            .map_err(|e| ResendVerificationError::RepositoryError(e.to_string()))?;

        self.email_notifier
            .send_verification_email(&user.email, &user.username, &token)
            .await
            .map_err(|e| ResendVerificationError::EmailSendFailed(e.to_string()))
    }
}
