use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new() -> Result<Self, HashError> {
        // Small-VPS friendly: 4MB memory, 3 iterations, 1 lane.
        Self::with_params(4 * 1024, 3, 1)
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| HashError::HashingFailed(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::HashingFailed(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| HashError::VerificationFailed(e.to_string()))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2Hasher {
        // Minimal cost for test speed.
        Argon2Hasher::with_params(8, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = fast_hasher();
        let hash = hasher.hash_password("hunter22").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("hunter22", &hash).unwrap());
        assert!(!hasher.verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = fast_hasher();
        let a = hasher.hash_password("hunter22").unwrap();
        let b = hasher.hash_password("hunter22").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_hash_string_errors() {
        let hasher = fast_hasher();
        let result = hasher.verify_password("hunter22", "not-a-phc-string");
        assert!(matches!(result, Err(HashError::VerificationFailed(_))));
    }
}
