use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::TokenBlacklistRepository;

pub struct RedisTokenBlacklist {
    client: Arc<Client>,
}

impl RedisTokenBlacklist {
    pub fn new(redis_url: &str) -> Result<Self, String> {
        let client =
            Client::open(redis_url).map_err(|e| format!("Redis connection error: {}", e))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    fn key(token: &str) -> String {
        format!("blacklisted_token:{}", token)
    }
}

#[async_trait]
impl TokenBlacklistRepository for RedisTokenBlacklist {
    async fn blacklist_token(&self, token: &str, ttl_seconds: u64) -> Result<(), String> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| format!("Redis connection error: {}", e))?;

        let _: () = conn
            .set_ex(Self::key(token), "1", ttl_seconds)
            .await
            .map_err(|e| format!("Failed to blacklist token: {}", e))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token: &str) -> Result<bool, String> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| format!("Redis connection error: {}", e))?;

        conn.exists(Self::key(token))
            .await
            .map_err(|e| format!("Failed to check token status: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_rejects_invalid_url() {
        assert!(RedisTokenBlacklist::new("invalid://url").is_err());
        assert!(RedisTokenBlacklist::new("redis://127.0.0.1/").is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_redis_surfaces_connection_error() {
        // Nothing listens on this port.
        let repo = RedisTokenBlacklist::new("redis://127.0.0.1:6399").unwrap();

        let result = repo.blacklist_token("abc", 60).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Redis connection error"));
    }
}
