use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::ports::outgoing::{UserQuery, UserRepository};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("Invalid verification token")]
    InvalidToken,

    #[error("Verification token has expired")]
    TokenExpired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IVerifyEmailUseCase: Send + Sync {
    async fn execute(&self, email: &str, token: &str) -> Result<(), VerifyEmailError>;
}

pub struct VerifyEmailService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> VerifyEmailService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IVerifyEmailUseCase for VerifyEmailService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, email: &str, token: &str) -> Result<(), VerifyEmailError> {
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?
            .ok_or(VerifyEmailError::UserNotFound)?;

        if user.email_verified {
            return Err(VerifyEmailError::AlreadyVerified);
        }

        match &user.verification_token {
            Some(stored) if stored == token => {}
            _ => return Err(VerifyEmailError::InvalidToken),
        }

        match user.token_expires_at {
            Some(expires_at) if expires_at > Utc::now() => {}
            _ => return Err(VerifyEmailError::TokenExpired),
        }

        self.repository
            .mark_email_verified(user.id)
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::{
        ProfileChanges, UserRepositoryError,
    };
    use crate::modules::auth::application::use_cases::test_support::{
        sample_user, StubUserQuery,
    };
    use chrono::Duration;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingRepository {
        verified: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn create_user(&self, _user: User) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _user_id: Uuid,
            _changes: ProfileChanges,
        ) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn mark_email_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
            self.verified.lock().unwrap().push(user_id);
            Ok(())
        }

        async fn set_verification_token(
            &self,
            _user_id: Uuid,
            _token: String,
            _expires_at: chrono::DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }
    }

    fn pending_user(token: &str, expires_in: Duration) -> User {
        let mut user = sample_user("jane", "jane@example.com");
        user.email_verified = false;
        user.verification_token = Some(token.to_string());
        user.token_expires_at = Some(Utc::now() + expires_in);
        user
    }

    #[tokio::test]
    async fn test_valid_token_verifies_email() {
        let user = pending_user("tok123", Duration::minutes(30));
        let id = user.id;
        let repository = RecordingRepository::default();
        let service = VerifyEmailService::new(StubUserQuery::with_users(vec![user]), repository);

        service.execute("jane@example.com", "tok123").await.unwrap();
        assert_eq!(*service.repository.verified.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_wrong_token_is_rejected() {
        let user = pending_user("tok123", Duration::minutes(30));
        let service = VerifyEmailService::new(
            StubUserQuery::with_users(vec![user]),
            RecordingRepository::default(),
        );

        let result = service.execute("jane@example.com", "other").await;
        assert!(matches!(result, Err(VerifyEmailError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let user = pending_user("tok123", Duration::minutes(-5));
        let service = VerifyEmailService::new(
            StubUserQuery::with_users(vec![user]),
            RecordingRepository::default(),
        );

        let result = service.execute("jane@example.com", "tok123").await;
        assert!(matches!(result, Err(VerifyEmailError::TokenExpired)));
    }

    #[tokio::test]
    async fn test_already_verified_is_rejected() {
        let user = sample_user("jane", "jane@example.com");
        let service = VerifyEmailService::new(
            StubUserQuery::with_users(vec![user]),
            RecordingRepository::default(),
        );

        let result = service.execute("jane@example.com", "tok123").await;
        assert!(matches!(result, Err(VerifyEmailError::AlreadyVerified)));
    }

    #[tokio::test]
    async fn test_unknown_email_is_not_found() {
        let service = VerifyEmailService::new(
            StubUserQuery::default(),
            RecordingRepository::default(),
        );

        let result = service.execute("nobody@example.com", "tok123").await;
        assert!(matches!(result, Err(VerifyEmailError::UserNotFound)));
    }
}
