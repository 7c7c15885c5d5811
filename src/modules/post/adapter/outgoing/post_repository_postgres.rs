use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::{PostRepository, PostRepositoryError};

use super::sea_orm_entity::{post_tags, posts, tags};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_or_create_tag(
        txn: &DatabaseTransaction,
        name: &str,
    ) -> Result<Uuid, PostRepositoryError> {
        let existing = tags::Entity::find()
            .filter(tags::Column::Name.eq(name))
            .one(txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        if let Some(tag) = existing {
            return Ok(tag.id);
        }

        let tag = tags::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
        };
        let created = tag
            .insert(txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;
        Ok(created.id)
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(
        &self,
        post: Post,
        tag_names: Vec<String>,
    ) -> Result<Post, PostRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let row = posts::ActiveModel {
            id: Set(post.id),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            excerpt: Set(post.excerpt.clone()),
            author_id: Set(post.author_id),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        };
        let created = row
            .insert(&txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        for name in &tag_names {
            let tag_id = Self::find_or_create_tag(&txn, name).await?;
            let link = post_tags::ActiveModel {
                post_id: Set(created.id),
                tag_id: Set(tag_id),
            };
            link.insert(&txn)
                .await
                .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(created.into())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        // Comments, votes, bookmarks and tag links go through ON DELETE
        // CASCADE on their foreign keys.
        let result = posts::Entity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::PostNotFound);
        }
        Ok(())
    }
}
