use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::ports::outgoing::{
    BookmarkRepository, BookmarkRepositoryError,
};

use super::sea_orm_entity::saved_posts;

fn is_unique_violation(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("duplicate key") || lower.contains("unique constraint") || lower.contains("23505")
}

fn is_foreign_key_violation(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("foreign key") || lower.contains("23503")
}

#[derive(Clone, Debug)]
pub struct BookmarkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookmarkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryPostgres {
    async fn save(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, BookmarkRepositoryError> {
        let row = saved_posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            post_id: Set(post_id),
            created_at: Set(Utc::now().into()),
        };

        match row.insert(&*self.db).await {
            Ok(_) => Ok(true),
            // Already bookmarked, a repeat save is not an error.
            Err(err) if is_unique_violation(&err.to_string()) => Ok(false),
            Err(err) if is_foreign_key_violation(&err.to_string()) => {
                Err(BookmarkRepositoryError::PostNotFound)
            }
            Err(err) => Err(BookmarkRepositoryError::DatabaseError(err.to_string())),
        }
    }

    async fn unsave(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, BookmarkRepositoryError> {
        let result = saved_posts::Entity::delete_many()
            .filter(saved_posts::Column::UserId.eq(user_id))
            .filter(saved_posts::Column::PostId.eq(post_id))
            .exec(&*self.db)
            .await
            .map_err(|e| BookmarkRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
