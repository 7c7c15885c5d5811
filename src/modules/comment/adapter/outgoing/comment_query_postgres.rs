use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::comment::application::domain::entities::Comment;
use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};

use super::sea_orm_entity::comments;

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError> {
        comments::Entity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map(|model| model.map(Into::into))
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))
    }

    async fn top_level_for_post(
        &self,
        post_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), CommentQueryError> {
        let paginator = comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .filter(comments::Column::ParentId.is_null())
            .order_by_desc(comments::Column::CreatedAt)
            .paginate(&*self.db, per_page);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn all_top_level_for_post(
        &self,
        post_id: Uuid,
    ) -> Result<Vec<Comment>, CommentQueryError> {
        comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .filter(comments::Column::ParentId.is_null())
            .order_by_desc(comments::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(Into::into).collect())
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))
    }

    async fn replies_for(
        &self,
        parent_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Comment>>, CommentQueryError> {
        let models = comments::Entity::find()
            .filter(comments::Column::ParentId.is_in(parent_ids.to_vec()))
            .order_by_asc(comments::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        let mut by_parent: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for model in models {
            if let Some(parent_id) = model.parent_id {
                by_parent.entry(parent_id).or_default().push(model.into());
            }
        }
        Ok(by_parent)
    }

    async fn authors(
        &self,
        author_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, AuthorSummary>, CommentQueryError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(|user| {
                (
                    user.id,
                    AuthorSummary {
                        id: user.id,
                        username: user.username,
                        avatar: user.avatar,
                        role: Role::parse(&user.role),
                    },
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn comment_model(parent_id: Option<Uuid>) -> comments::Model {
        comments::Model {
            id: Uuid::new_v4(),
            content: "Hello".to_string(),
            author_id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            parent_id,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let model = comment_model(None);
        let id = model.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .into_connection();

        let query = CommentQueryPostgres::new(Arc::new(db));
        let comment = query.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(comment.id, id);
        assert_eq!(comment.content, "Hello");
    }

    #[tokio::test]
    async fn test_all_top_level_for_post_fetches_without_pagination() {
        let post_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![comment_model(None), comment_model(None)]])
            .into_connection();

        let query = CommentQueryPostgres::new(Arc::new(db));
        let comments = query.all_top_level_for_post(post_id).await.unwrap();
        assert_eq!(comments.len(), 2);
    }

    #[tokio::test]
    async fn test_replies_for_groups_by_parent() {
        let parent_a = Uuid::new_v4();
        let parent_b = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                comment_model(Some(parent_a)),
                comment_model(Some(parent_a)),
                comment_model(Some(parent_b)),
            ]])
            .into_connection();

        let query = CommentQueryPostgres::new(Arc::new(db));
        let by_parent = query.replies_for(&[parent_a, parent_b]).await.unwrap();
        assert_eq!(by_parent[&parent_a].len(), 2);
        assert_eq!(by_parent[&parent_b].len(), 1);
    }
}
