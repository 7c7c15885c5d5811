use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::Comment;
use crate::modules::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError,
};
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts;
use crate::modules::vote::adapter::outgoing::sea_orm_entity::votes;

use super::sea_orm_entity::comments;

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(&self, comment: Comment) -> Result<Comment, CommentRepositoryError> {
        let post = posts::Entity::find_by_id(comment.post_id)
            .one(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;
        if post.is_none() {
            return Err(CommentRepositoryError::PostNotFound);
        }

        if let Some(parent_id) = comment.parent_id {
            let parent = comments::Entity::find_by_id(parent_id)
                .one(&*self.db)
                .await
                .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;
            if parent.is_none() {
                return Err(CommentRepositoryError::ParentNotFound);
            }
        }

        let row = comments::ActiveModel {
            id: Set(comment.id),
            content: Set(comment.content.clone()),
            author_id: Set(comment.author_id),
            post_id: Set(comment.post_id),
            parent_id: Set(comment.parent_id),
            created_at: Set(comment.created_at.into()),
            updated_at: Set(Utc::now().into()),
        };

        let created = row
            .insert(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(created.into())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        let reply_ids: Vec<Uuid> = comments::Entity::find()
            .filter(comments::Column::ParentId.eq(comment_id))
            .all(&txn)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|reply| reply.id)
            .collect();

        let mut affected: Vec<Uuid> = reply_ids;
        affected.push(comment_id);

        votes::Entity::delete_many()
            .filter(votes::Column::CommentId.is_in(affected.clone()))
            .exec(&txn)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        comments::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(comments::Column::Id.eq(comment_id))
                    .add(comments::Column::ParentId.eq(comment_id)),
            )
            .exec(&txn)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn post_model(id: Uuid) -> posts::Model {
        posts::Model {
            id,
            title: "A post".to_string(),
            content: "Content".to_string(),
            excerpt: "Content".to_string(),
            author_id: Uuid::new_v4(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn comment_model(post_id: Uuid) -> comments::Model {
        comments::Model {
            id: Uuid::new_v4(),
            content: "First".to_string(),
            author_id: Uuid::new_v4(),
            post_id,
            parent_id: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_comment_inserts_row() {
        let post_id = Uuid::new_v4();
        let inserted = comment_model(post_id);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id)]])
            .append_query_results([vec![inserted.clone()]])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        let comment = Comment {
            id: inserted.id,
            content: "First".to_string(),
            author_id: inserted.author_id,
            post_id,
            parent_id: None,
            created_at: Utc::now(),
        };

        let created = repo.create_comment(comment).await.unwrap();
        assert_eq!(created.content, "First");
        assert_eq!(created.post_id, post_id);
    }

    #[tokio::test]
    async fn test_create_comment_requires_existing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<posts::Model>::new()])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        let comment = Comment {
            id: Uuid::new_v4(),
            content: "Orphan".to_string(),
            author_id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            parent_id: None,
            created_at: Utc::now(),
        };

        let err = repo.create_comment(comment).await.unwrap_err();
        assert!(matches!(err, CommentRepositoryError::PostNotFound));
    }

    #[tokio::test]
    async fn test_delete_comment_removes_replies_and_votes() {
        let post_id = Uuid::new_v4();
        let mut reply = comment_model(post_id);
        reply.parent_id = Some(Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![reply]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
            ])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        repo.delete_comment(Uuid::new_v4()).await.unwrap();
    }
}
