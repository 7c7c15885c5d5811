use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenProvider,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Blacklist failure: {0}")]
    BlacklistFailure(String),
}

#[async_trait]
pub trait ILogoutUserUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

pub struct LogoutUserService {
    token_provider: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklistRepository>,
}

impl LogoutUserService {
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        blacklist: Arc<dyn TokenBlacklistRepository>,
    ) -> Self {
        Self {
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl ILogoutUserUseCase for LogoutUserService {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = self
            .token_provider
            .verify_token(token)
            .map_err(|_| LogoutError::InvalidToken)?;

        // Blacklist only for as long as the token itself is valid.
        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            return Ok(());
        }

        self.blacklist
            .blacklist_token(token, remaining as u64)
            .await
            .map_err(LogoutError::BlacklistFailure)
    }
}
