use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
use crate::modules::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::modules::post::application::domain::entities::{Post, PostFilter, PostSort};
use crate::modules::post::application::ports::outgoing::{PostQuery, PostQueryError};

use super::sea_orm_entity::{post_tags, posts, saved_posts, tags};

#[derive(Debug, FromQueryResult)]
struct CommentCountRow {
    post_id: Uuid,
    count: i64,
}

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Posts carrying at least one of the given tag names.
    async fn post_ids_with_tags(&self, names: &[String]) -> Result<Vec<Uuid>, PostQueryError> {
        let tag_ids: Vec<Uuid> = tags::Entity::find()
            .filter(tags::Column::Name.is_in(names.to_vec()))
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|tag| tag.id)
            .collect();

        let links = post_tags::Entity::find()
            .filter(post_tags::Column::TagId.is_in(tag_ids))
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(links.into_iter().map(|link| link.post_id).collect())
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map(|model| model.map(Into::into))
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))
    }

    async fn list(&self, filter: &PostFilter) -> Result<(Vec<Post>, u64), PostQueryError> {
        let mut query = posts::Entity::find();

        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col((posts::Entity, posts::Column::Title)).ilike(pattern.clone()))
                    .add(Expr::col((posts::Entity, posts::Column::Content)).ilike(pattern)),
            );
        }

        if !filter.tags.is_empty() {
            let tagged = self.post_ids_with_tags(&filter.tags).await?;
            query = query.filter(posts::Column::Id.is_in(tagged));
        }

        query = match filter.sort {
            PostSort::Newest => query.order_by_desc(posts::Column::CreatedAt),
            PostSort::Popular => query
                .order_by(
                    Expr::cust("(SELECT COUNT(*) FROM votes WHERE votes.post_id = posts.id)"),
                    Order::Desc,
                )
                .order_by_desc(posts::Column::CreatedAt),
        };

        let paginator = query.paginate(&*self.db, filter.per_page);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;
        let page = paginator
            .fetch_page(filter.page.saturating_sub(1))
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok((page.into_iter().map(Into::into).collect(), total))
    }

    async fn authors(
        &self,
        author_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, AuthorSummary>, PostQueryError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

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

    async fn tags_for(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<String>>, PostQueryError> {
        let links = post_tags::Entity::find()
            .filter(post_tags::Column::PostId.is_in(post_ids.to_vec()))
            .find_also_related(tags::Entity)
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        let mut by_post: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (link, tag) in links {
            if let Some(tag) = tag {
                by_post.entry(link.post_id).or_default().push(tag.name);
            }
        }
        Ok(by_post)
    }

    async fn comment_counts(
        &self,
        post_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, u64>, PostQueryError> {
        let rows = comments::Entity::find()
            .select_only()
            .column(comments::Column::PostId)
            .column_as(comments::Column::Id.count(), "count")
            .filter(comments::Column::PostId.is_in(post_ids.to_vec()))
            .group_by(comments::Column::PostId)
            .into_model::<CommentCountRow>()
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| (row.post_id, row.count as u64))
            .collect())
    }

    async fn bookmarked_among(
        &self,
        viewer: Uuid,
        post_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>, PostQueryError> {
        let rows = saved_posts::Entity::find()
            .filter(saved_posts::Column::UserId.eq(viewer))
            .filter(saved_posts::Column::PostId.is_in(post_ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.post_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn post_model() -> posts::Model {
        posts::Model {
            id: Uuid::new_v4(),
            title: "A post".to_string(),
            content: "Content".to_string(),
            excerpt: "Content".to_string(),
            author_id: Uuid::new_v4(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let model = post_model();
        let id = model.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let post = query.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.id, id);
        assert_eq!(post.title, "A post");
    }

    #[tokio::test]
    async fn test_tags_for_groups_by_post() {
        let post_id = Uuid::new_v4();
        let tag = tags::Model {
            id: Uuid::new_v4(),
            name: "rust".to_string(),
        };
        let link = post_tags::Model {
            post_id,
            tag_id: tag.id,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(link, tag)]])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let by_post = query.tags_for(&[post_id]).await.unwrap();
        assert_eq!(by_post[&post_id], vec!["rust"]);
    }

    #[tokio::test]
    async fn test_bookmarked_among_collects_post_ids() {
        let viewer = Uuid::new_v4();
        let post_id = Uuid::new_v4();
        let row = saved_posts::Model {
            id: Uuid::new_v4(),
            user_id: viewer,
            post_id,
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let bookmarked = query
            .bookmarked_among(viewer, &[post_id, Uuid::new_v4()])
            .await
            .unwrap();
        assert!(bookmarked.contains(&post_id));
        assert_eq!(bookmarked.len(), 1);
    }
}
