use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    ProfileChanges, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_unique_violation(e: sea_orm::DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        if err_str.contains("email") {
            return UserRepositoryError::EmailAlreadyExists;
        }
        return UserRepositoryError::UsernameAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            avatar: Set(user.avatar),
            bio: Set(user.bio),
            role: Set(user.role.as_str().to_string()),
            reputation: Set(user.reputation),
            email_verified: Set(user.email_verified),
            verification_token: Set(user.verification_token),
            token_expires_at: Set(user.token_expires_at.map(Into::into)),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(inserted.into())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        if let Some(username) = changes.username {
            active_user.username = Set(username);
        }
        if let Some(bio) = changes.bio {
            active_user.bio = Set(Some(bio));
        }
        if let Some(avatar) = changes.avatar {
            active_user.avatar = Set(Some(avatar));
        }
        active_user.updated_at = Set(Utc::now().into());

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(updated.into())
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.email_verified = Set(true);
        active_user.verification_token = Set(None);
        active_user.token_expires_at = Set(None);
        active_user.updated_at = Set(Utc::now().into());

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn set_verification_token(
        &self,
        user_id: Uuid,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.verification_token = Set(Some(token));
        active_user.token_expires_at = Set(Some(expires_at.into()));
        active_user.updated_at = Set(Utc::now().into());

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
    use crate::modules::auth::application::domain::entities::Role;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn user_model(id: Uuid) -> users::Model {
        users::Model {
            id,
            email: "jane@example.com".to_string(),
            username: "jane".to_string(),
            password_hash: "hash".to_string(),
            avatar: None,
            bio: None,
            role: "user".to_string(),
            reputation: 0,
            email_verified: false,
            verification_token: Some("tok".to_string()),
            token_expires_at: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn domain_user(id: Uuid) -> User {
        user_model(id).into()
    }

    #[tokio::test]
    async fn test_create_user_inserts_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(id)]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_user(domain_user(id)).await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.role, Role::User);
    }

    #[tokio::test]
    async fn test_create_user_maps_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(domain_user(Uuid::new_v4())).await;

        assert!(matches!(result, Err(UserRepositoryError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_mark_email_verified_clears_token() {
        let id = Uuid::new_v4();
        let mut verified = user_model(id);
        verified.email_verified = true;
        verified.verification_token = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(id)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![verified]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        repo.mark_email_verified(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_profile_unknown_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_profile(Uuid::new_v4(), ProfileChanges::default())
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }
}
