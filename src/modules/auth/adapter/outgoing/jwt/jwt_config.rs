use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds; access tokens default to 7 days.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    fn parse_expiry(key: &str, default: &str) -> i64 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    /// Load JWT configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 needs at least 32 bytes of key material.
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256");
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", "604800");
        if access_token_expiry <= 0 {
            panic!("JWT_ACCESS_EXPIRY must be positive");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "Forumverse".to_string());

        Self {
            secret_key,
            issuer,
            access_token_expiry,
        }
    }
}

#[cfg(test)]
impl JwtConfig {
    pub fn for_tests() -> Self {
        Self {
            secret_key: "test-secret-key-that-is-long-enough!".to_string(),
            issuer: "Forumverse".to_string(),
            access_token_expiry: 3600,
        }
    }
}
