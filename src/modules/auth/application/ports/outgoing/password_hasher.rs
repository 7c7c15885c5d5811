#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, HashError>;
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
