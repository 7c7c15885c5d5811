use async_trait::async_trait;

/// Store for tokens invalidated by logout. Entries expire on their own
/// once the token itself would have expired.
#[async_trait]
pub trait TokenBlacklistRepository: Send + Sync {
    async fn blacklist_token(&self, token: &str, ttl_seconds: u64) -> Result<(), String>;
    async fn is_token_blacklisted(&self, token: &str) -> Result<bool, String>;
}
