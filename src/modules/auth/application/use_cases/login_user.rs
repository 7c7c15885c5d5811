use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email not verified")]
    EmailNotVerified,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub user: UserView,
    pub access_token: String,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginOutput, LoginError>;
}

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, email: &str, password: &str) -> Result<LoginOutput, LoginError> {
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        if !user.email_verified {
            return Err(LoginError::EmailNotVerified);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginOutput {
            user: UserView::from(&user),
            access_token,
        })
    }
}
