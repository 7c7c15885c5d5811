use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::modules::post::adapter::outgoing::sea_orm_entity::{post_tags, posts, tags};
use crate::modules::stats::application::domain::entities::{
    ActivityItem, ActivityKind, CommunityStats, PopularTag,
};
use crate::modules::stats::application::ports::outgoing::{StatsQuery, StatsQueryError};

/// Titles for comment activity entries come from the comment body,
/// clipped to this many characters.
const COMMENT_TITLE_LENGTH: usize = 80;

#[derive(Debug, FromQueryResult)]
struct TagCountRow {
    name: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct AuthorIdRow {
    author_id: Uuid,
}

fn clip(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let clipped: String = content.chars().take(max_chars).collect();
    format!("{}...", clipped)
}

#[derive(Clone, Debug)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn community_stats(&self) -> Result<CommunityStats, StatsQueryError> {
        let total_posts = posts::Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        let total_users = users::Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        let midnight = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .unwrap_or_else(Utc::now);
        let posts_today = posts::Entity::find()
            .filter(posts::Column::CreatedAt.gte(midnight))
            .count(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        let cutoff = Utc::now() - Duration::days(7);
        let post_authors: Vec<Uuid> = posts::Entity::find()
            .select_only()
            .column_as(posts::Column::AuthorId, "author_id")
            .distinct()
            .filter(posts::Column::CreatedAt.gte(cutoff))
            .into_model::<AuthorIdRow>()
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(|row| row.author_id).collect())
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;
        let comment_authors: Vec<Uuid> = comments::Entity::find()
            .select_only()
            .column_as(comments::Column::AuthorId, "author_id")
            .distinct()
            .filter(comments::Column::CreatedAt.gte(cutoff))
            .into_model::<AuthorIdRow>()
            .all(&*self.db)
            .await
            .map(|rows| rows.into_iter().map(|row| row.author_id).collect())
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        let active: HashSet<Uuid> = post_authors
            .into_iter()
            .chain(comment_authors)
            .collect();

        Ok(CommunityStats {
            total_posts,
            total_users,
            posts_today,
            active_users: active.len() as u64,
        })
    }

    async fn popular_tags(&self, limit: u64) -> Result<Vec<PopularTag>, StatsQueryError> {
        let rows = post_tags::Entity::find()
            .select_only()
            .column_as(tags::Column::Name, "name")
            .column_as(post_tags::Column::PostId.count(), "count")
            .join(JoinType::InnerJoin, post_tags::Relation::Tag.def())
            .group_by(tags::Column::Name)
            .order_by_desc(post_tags::Column::PostId.count())
            .limit(limit)
            .into_model::<TagCountRow>()
            .all(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| PopularTag {
                name: row.name,
                post_count: row.count as u64,
            })
            .collect())
    }

    async fn recent_posts(&self, limit: u64) -> Result<Vec<ActivityItem>, StatsQueryError> {
        let rows = posts::Entity::find()
            .order_by_desc(posts::Column::CreatedAt)
            .limit(limit)
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(post, author)| ActivityItem {
                kind: ActivityKind::Post,
                id: post.id,
                post_id: post.id,
                title: post.title,
                author_username: author
                    .map(|user| user.username)
                    .unwrap_or_else(|| "deleted".to_string()),
                created_at: post.created_at.into(),
            })
            .collect())
    }

    async fn recent_comments(&self, limit: u64) -> Result<Vec<ActivityItem>, StatsQueryError> {
        let rows = comments::Entity::find()
            .order_by_desc(comments::Column::CreatedAt)
            .limit(limit)
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| ActivityItem {
                kind: ActivityKind::Comment,
                id: comment.id,
                post_id: comment.post_id,
                title: clip(&comment.content, COMMENT_TITLE_LENGTH),
                author_username: author
                    .map(|user| user.username)
                    .unwrap_or_else(|| "deleted".to_string()),
                created_at: comment.created_at.into(),
            })
            .collect())
    }
}
