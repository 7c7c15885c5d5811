use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            role: role.as_str().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token verification failed: invalid signature");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::debug!("Token verification failed: malformed");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let service = JwtTokenService::new(JwtConfig::for_tests());
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id, Role::Moderator)
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role(), Role::Moderator);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = JwtTokenService::new(JwtConfig::for_tests());

        let result = service.verify_token("not.a.jwt");
        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let service = JwtTokenService::new(JwtConfig::for_tests());
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "another-secret-key-also-long-enough!".to_string(),
            issuer: "Forumverse".to_string(),
            access_token_expiry: 3600,
        });

        let token = other
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();
        let result = service.verify_token(&token);

        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtTokenService::new(JwtConfig {
            secret_key: "test-secret-key-that-is-long-enough!".to_string(),
            issuer: "Forumverse".to_string(),
            // Beyond the 30s verification leeway
            access_token_expiry: -120,
        });

        let token = service
            .generate_access_token(Uuid::new_v4(), Role::User)
            .unwrap();
        let result = service.verify_token(&token);

        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }
}
