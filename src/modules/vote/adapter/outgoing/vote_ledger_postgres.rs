use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts;
use crate::modules::vote::application::domain::entities::{
    decide, LedgerWrite, TargetKind, VoteAction, VoteType,
};
use crate::modules::vote::application::domain::entities::VoteTarget;
use crate::modules::vote::application::ports::outgoing::{
    VoteLedger, VoteLedgerError, VoteReceipt,
};

use super::sea_orm_entity::votes;

#[derive(Clone, Debug)]
pub struct VoteLedgerPostgres {
    db: Arc<DatabaseConnection>,
}

impl VoteLedgerPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn is_unique_violation(message: &str) -> bool {
        let message = message.to_lowercase();
        message.contains("duplicate key")
            || message.contains("unique constraint")
            || message.contains("23505")
    }

    /// Resolves the target row, returning its author and owning post.
    async fn resolve_target(
        txn: &DatabaseTransaction,
        target: VoteTarget,
    ) -> Result<(Uuid, Uuid), VoteLedgerError> {
        match target.kind {
            TargetKind::Post => {
                let post = posts::Entity::find_by_id(target.id)
                    .one(txn)
                    .await
                    .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))?
                    .ok_or(VoteLedgerError::TargetNotFound)?;
                Ok((post.author_id, post.id))
            }
            TargetKind::Comment => {
                let comment = comments::Entity::find_by_id(target.id)
                    .one(txn)
                    .await
                    .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))?
                    .ok_or(VoteLedgerError::TargetNotFound)?;
                Ok((comment.author_id, comment.post_id))
            }
        }
    }

    async fn find_existing(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        target: VoteTarget,
    ) -> Result<Option<votes::Model>, VoteLedgerError> {
        let query = votes::Entity::find().filter(votes::Column::UserId.eq(user_id));
        let query = match target.kind {
            TargetKind::Post => query.filter(votes::Column::PostId.eq(target.id)),
            TargetKind::Comment => query.filter(votes::Column::CommentId.eq(target.id)),
        };
        query
            .one(txn)
            .await
            .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))
    }

    async fn toggle_once(
        &self,
        user_id: Uuid,
        target: VoteTarget,
        action: VoteAction,
    ) -> Result<VoteReceipt, VoteLedgerError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))?;

        let (target_author, post_id) = Self::resolve_target(&txn, target).await?;

        let existing = Self::find_existing(&txn, user_id, target).await?;
        let existing_type = existing.as_ref().and_then(|m| VoteType::parse(&m.vote_type));

        let (write, outcome) = decide(existing_type, action);

        match (write, existing) {
            (LedgerWrite::Insert(vote_type), _) => {
                let row = votes::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    vote_type: Set(vote_type.as_str().to_string()),
                    post_id: Set((target.kind == TargetKind::Post).then_some(target.id)),
                    comment_id: Set((target.kind == TargetKind::Comment).then_some(target.id)),
                    created_at: Set(Utc::now().into()),
                };
                row.insert(&txn)
                    .await
                    .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))?;
            }
            (LedgerWrite::Update(vote_type), Some(model)) => {
                let mut row: votes::ActiveModel = model.into();
                row.vote_type = Set(vote_type.as_str().to_string());
                row.update(&txn)
                    .await
                    .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))?;
            }
            (LedgerWrite::Delete, Some(model)) => {
                votes::Entity::delete_by_id(model.id)
                    .exec(&txn)
                    .await
                    .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))?;
            }
            _ => {}
        }

        txn.commit()
            .await
            .map_err(|e| VoteLedgerError::DatabaseError(e.to_string()))?;

        Ok(VoteReceipt {
            outcome,
            target_author,
            post_id,
        })
    }
}

#[async_trait]
impl VoteLedger for VoteLedgerPostgres {
    async fn apply(
        &self,
        user_id: Uuid,
        target: VoteTarget,
        action: VoteAction,
    ) -> Result<VoteReceipt, VoteLedgerError> {
        match self.toggle_once(user_id, target, action).await {
            // A concurrent insert beat ours to the partial unique index.
            // The fresh run reads the winner's row and toggles against it.
            Err(VoteLedgerError::DatabaseError(message))
                if Self::is_unique_violation(&message) =>
            {
                tracing::debug!(
                    "Concurrent vote insert for target {}, re-running toggle",
                    target.id
                );
                self.toggle_once(user_id, target, action).await
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::vote::application::domain::entities::VoteOutcome;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn post_model(author_id: Uuid) -> posts::Model {
        posts::Model {
            id: Uuid::new_v4(),
            title: "A post".to_string(),
            content: "Content".to_string(),
            excerpt: "Content".to_string(),
            author_id,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn vote_model(user_id: Uuid, post_id: Uuid, vote_type: &str) -> votes::Model {
        votes::Model {
            id: Uuid::new_v4(),
            user_id,
            vote_type: vote_type.to_string(),
            post_id: Some(post_id),
            comment_id: None,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_first_post_vote_inserts_row() {
        let author_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let post = post_model(author_id);
        let post_id = post.id;
        let inserted = vote_model(user_id, post_id, "UP");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post]])
            .append_query_results([Vec::<votes::Model>::new()])
            .append_query_results([vec![inserted]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let ledger = VoteLedgerPostgres::new(Arc::new(db));
        let receipt = ledger
            .apply(user_id, VoteTarget::post(post_id), VoteAction::Up)
            .await
            .unwrap();

        assert_eq!(receipt.outcome, VoteOutcome::Created(VoteType::Up));
        assert_eq!(receipt.target_author, author_id);
        assert_eq!(receipt.post_id, post_id);
    }

    #[tokio::test]
    async fn test_repeated_vote_deletes_row() {
        let user_id = Uuid::new_v4();
        let post = post_model(Uuid::new_v4());
        let post_id = post.id;
        let existing = vote_model(user_id, post_id, "UP");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post]])
            .append_query_results([vec![existing]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let ledger = VoteLedgerPostgres::new(Arc::new(db));
        let receipt = ledger
            .apply(user_id, VoteTarget::post(post_id), VoteAction::Up)
            .await
            .unwrap();

        assert_eq!(receipt.outcome, VoteOutcome::Removed);
    }

    #[tokio::test]
    async fn test_missing_target_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<posts::Model>::new()])
            .into_connection();

        let ledger = VoteLedgerPostgres::new(Arc::new(db));
        let result = ledger
            .apply(Uuid::new_v4(), VoteTarget::post(Uuid::new_v4()), VoteAction::Up)
            .await;

        assert!(matches!(result, Err(VoteLedgerError::TargetNotFound)));
    }

    #[tokio::test]
    async fn test_remove_without_vote_writes_nothing() {
        let post = post_model(Uuid::new_v4());
        let post_id = post.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post]])
            .append_query_results([Vec::<votes::Model>::new()])
            .into_connection();

        let ledger = VoteLedgerPostgres::new(Arc::new(db));
        let receipt = ledger
            .apply(
                Uuid::new_v4(),
                VoteTarget::post(post_id),
                VoteAction::Remove,
            )
            .await
            .unwrap();

        assert_eq!(receipt.outcome, VoteOutcome::NoOp);
    }
}
