use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenProvider,
};

struct NoopTokenBlacklist;

#[async_trait]
impl TokenBlacklistRepository for NoopTokenBlacklist {
    async fn blacklist_token(&self, _token: &str, _ttl_seconds: u64) -> Result<(), String> {
        Ok(())
    }

    async fn is_token_blacklisted(&self, _token: &str) -> Result<bool, String> {
        Ok(false)
    }
}

/// Token provider, blacklist and a valid bearer token for a regular
/// user, ready to register as app data in a route test.
pub fn auth_headers() -> (
    web::Data<Arc<dyn TokenProvider>>,
    web::Data<Arc<dyn TokenBlacklistRepository>>,
    String,
) {
    auth_headers_for_role(Role::User)
}

pub fn auth_headers_for_role(
    role: Role,
) -> (
    web::Data<Arc<dyn TokenProvider>>,
    web::Data<Arc<dyn TokenBlacklistRepository>>,
    String,
) {
    let provider: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(JwtConfig::for_tests()));
    let token = provider
        .generate_access_token(Uuid::new_v4(), role)
        .expect("test token generation failed");
    let blacklist: Arc<dyn TokenBlacklistRepository> = Arc::new(NoopTokenBlacklist);
    (web::Data::new(provider), web::Data::new(blacklist), token)
}
