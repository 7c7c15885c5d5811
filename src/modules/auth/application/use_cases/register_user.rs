use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::RngCore;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User, UserView};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository,
};
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;

const VERIFICATION_TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Username must be between 3 and 20 characters")]
    InvalidUsername,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterUserError> {
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::InvalidEmail);
        }
        let trimmed = username.trim();
        if trimmed.len() < 3 || trimmed.len() > 20 {
            return Err(RegisterUserError::InvalidUsername);
        }
        if password.len() < 6 {
            return Err(RegisterUserError::WeakPassword);
        }
        Ok(Self {
            username: trimmed.to_string(),
            email,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError>;
}

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        email_notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            email_notifier,
        }
    }
}

/// One-time token mailed to the user; stored on the row, compared on
/// verification.
pub fn generate_verification_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        if self
            .query
            .find_by_email(&command.email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        if self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterUserError::UsernameAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let token = generate_verification_token();
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: command.email,
            username: command.username,
            password_hash,
            avatar: None,
            bio: None,
            role: Role::User,
            reputation: 0,
            email_verified: false,
            verification_token: Some(token.clone()),
            token_expires_at: Some(now + Duration::seconds(VERIFICATION_TOKEN_TTL_SECONDS)),
            created_at: now,
            updated_at: now,
        };

        let created = self
            .repository
            .create_user(user)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        // The account exists either way; a failed send is recoverable
        // through the resend endpoint.
        if let Err(e) = self
            .email_notifier
            .send_verification_email(&created.email, &created.username, &token)
            .await
        {
            tracing::warn!("Verification email to {} failed: {}", created.email, e);
        }

        Ok(UserView::from(&created))
    }
}
