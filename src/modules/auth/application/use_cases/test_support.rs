use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};

pub fn sample_user(username: &str, email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        username: username.to_string(),
        password_hash: "hashed".to_string(),
        avatar: None,
        bio: None,
        role: Role::User,
        reputation: 0,
        email_verified: true,
        verification_token: None,
        token_expires_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct StubUserQuery {
    users: Vec<User>,
    fail: bool,
}

impl StubUserQuery {
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            users: vec![],
            fail: true,
        }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("query failed".to_string()));
        }
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("query failed".to_string()));
        }
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("query failed".to_string()));
        }
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}
