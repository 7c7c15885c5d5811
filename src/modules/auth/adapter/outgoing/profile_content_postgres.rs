use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    ProfileComment, ProfileContent, ProfileContentError, ProfileContentQuery, ProfilePost,
};
use crate::modules::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::modules::post::adapter::outgoing::sea_orm_entity::{posts, saved_posts};
use crate::modules::report::adapter::outgoing::sea_orm_entity::reports;
use crate::modules::vote::adapter::outgoing::sea_orm_entity::votes;
use crate::modules::vote::application::domain::entities::VoteSummary;

#[derive(Clone, Debug)]
pub struct ProfileContentPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileContentPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn profile_post(model: posts::Model) -> ProfilePost {
    ProfilePost {
        id: model.id,
        title: model.title,
        excerpt: model.excerpt,
        created_at: model.created_at.into(),
        votes: VoteSummary::default(),
    }
}

#[async_trait]
impl ProfileContentQuery for ProfileContentPostgres {
    async fn content_for(&self, user_id: Uuid) -> Result<ProfileContent, ProfileContentError> {
        let db = &*self.db;
        let map_err = |e: sea_orm::DbErr| ProfileContentError::DatabaseError(e.to_string());

        let posts = posts::Entity::find()
            .filter(posts::Column::AuthorId.eq(user_id))
            .order_by_desc(posts::Column::CreatedAt)
            .all(db)
            .await
            .map_err(map_err)?
            .into_iter()
            .map(profile_post)
            .collect();

        let comments = comments::Entity::find()
            .filter(comments::Column::AuthorId.eq(user_id))
            .order_by_desc(comments::Column::CreatedAt)
            .all(db)
            .await
            .map_err(map_err)?
            .into_iter()
            .map(|model| ProfileComment {
                id: model.id,
                content: model.content,
                post_id: model.post_id,
                created_at: model.created_at.into(),
            })
            .collect();

        let saved_posts = saved_posts::Entity::find()
            .filter(saved_posts::Column::UserId.eq(user_id))
            .find_also_related(posts::Entity)
            .order_by_desc(saved_posts::Column::CreatedAt)
            .all(db)
            .await
            .map_err(map_err)?
            .into_iter()
            .filter_map(|(_, post)| post.map(profile_post))
            .collect();

        let vote_count = votes::Entity::find()
            .filter(votes::Column::UserId.eq(user_id))
            .count(db)
            .await
            .map_err(map_err)?;

        let report_count = reports::Entity::find()
            .filter(reports::Column::ReporterId.eq(user_id))
            .count(db)
            .await
            .map_err(map_err)?;

        Ok(ProfileContent {
            posts,
            comments,
            saved_posts,
            vote_count,
            report_count,
        })
    }
}
