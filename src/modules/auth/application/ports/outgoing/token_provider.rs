use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims carried by every access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub role: String,
}

impl TokenClaims {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
