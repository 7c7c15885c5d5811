use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::{
    TargetKind, VoteSummary, VoteTarget, VoteType,
};
use crate::modules::vote::application::ports::outgoing::{VoteAggregator, VoteAggregatorError};

use super::sea_orm_entity::votes;

#[derive(Debug, FromQueryResult)]
struct VoteCountRow {
    target_id: Uuid,
    vote_type: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct OwnVoteRow {
    target_id: Uuid,
    vote_type: String,
}

#[derive(Clone, Debug)]
pub struct VoteAggregatorPostgres {
    db: Arc<DatabaseConnection>,
}

impl VoteAggregatorPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn target_column(kind: TargetKind) -> votes::Column {
        match kind {
            TargetKind::Post => votes::Column::PostId,
            TargetKind::Comment => votes::Column::CommentId,
        }
    }
}

#[async_trait]
impl VoteAggregator for VoteAggregatorPostgres {
    async fn summary(
        &self,
        target: VoteTarget,
        viewer: Option<Uuid>,
    ) -> Result<VoteSummary, VoteAggregatorError> {
        let mut summaries = self.summaries(target.kind, &[target.id], viewer).await?;
        Ok(summaries.remove(&target.id).unwrap_or_default())
    }

    async fn summaries(
        &self,
        kind: TargetKind,
        ids: &[Uuid],
        viewer: Option<Uuid>,
    ) -> Result<HashMap<Uuid, VoteSummary>, VoteAggregatorError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let column = Self::target_column(kind);

        // One grouped count over (target, vote_type) covers the whole page.
        let counts = votes::Entity::find()
            .select_only()
            .column_as(column, "target_id")
            .column(votes::Column::VoteType)
            .column_as(votes::Column::Id.count(), "count")
            .filter(column.is_in(ids.to_vec()))
            .group_by(column)
            .group_by(votes::Column::VoteType)
            .into_model::<VoteCountRow>()
            .all(&*self.db)
            .await
            .map_err(|e| VoteAggregatorError::DatabaseError(e.to_string()))?;

        let mut summaries: HashMap<Uuid, VoteSummary> = HashMap::new();
        for row in counts {
            let entry = summaries.entry(row.target_id).or_default();
            match VoteType::parse(&row.vote_type) {
                Some(VoteType::Up) => entry.upvotes = row.count,
                Some(VoteType::Down) => entry.downvotes = row.count,
                None => {}
            }
        }

        if let Some(viewer) = viewer {
            let own = votes::Entity::find()
                .select_only()
                .column_as(column, "target_id")
                .column(votes::Column::VoteType)
                .filter(column.is_in(ids.to_vec()))
                .filter(votes::Column::UserId.eq(viewer))
                .into_model::<OwnVoteRow>()
                .all(&*self.db)
                .await
                .map_err(|e| VoteAggregatorError::DatabaseError(e.to_string()))?;

            for row in own {
                summaries.entry(row.target_id).or_default().user_vote =
                    VoteType::parse(&row.vote_type);
            }
        }

        Ok(summaries)
    }
}
