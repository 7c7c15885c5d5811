use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::notification::application::ports::incoming::{
    INotifyUseCase, NotifyCommand,
};
use crate::modules::notification::application::domain::entities::NotificationType;
use crate::modules::vote::application::domain::entities::{
    TargetKind, VoteAction, VoteOutcome, VoteTarget, VoteType,
};
use crate::modules::vote::application::ports::outgoing::{
    VoteLedger, VoteLedgerError, VoteReceipt,
};
use crate::shared::realtime::{EventBus, ForumEvent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplyVoteError {
    #[error("Vote target not found")]
    TargetNotFound,

    #[error("Store failure: {0}")]
    StoreFailure(String),
}

#[derive(Debug, Clone)]
pub struct ApplyVoteResult {
    pub outcome: VoteOutcome,
    pub message: &'static str,
}

#[async_trait]
pub trait IApplyVoteUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        target: VoteTarget,
        action: VoteAction,
    ) -> Result<ApplyVoteResult, ApplyVoteError>;
}

pub struct ApplyVoteService<L>
where
    L: VoteLedger,
{
    ledger: L,
    users: Arc<dyn UserQuery>,
    notifier: Arc<dyn INotifyUseCase>,
    event_bus: Arc<dyn EventBus>,
}

impl<L> ApplyVoteService<L>
where
    L: VoteLedger,
{
    pub fn new(
        ledger: L,
        users: Arc<dyn UserQuery>,
        notifier: Arc<dyn INotifyUseCase>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            ledger,
            users,
            notifier,
            event_bus,
        }
    }

    fn broadcast(&self, user_id: Uuid, target: VoteTarget, outcome: VoteOutcome) {
        let event = match (target.kind, outcome.resulting_vote()) {
            (TargetKind::Post, Some(vote_type)) => ForumEvent::global(
                "postVoted",
                serde_json::json!({
                    "postId": target.id,
                    "voteType": vote_type,
                    "userId": user_id,
                }),
            ),
            (TargetKind::Post, None) => ForumEvent::global(
                "postUnvoted",
                serde_json::json!({ "postId": target.id, "userId": user_id }),
            ),
            (TargetKind::Comment, Some(vote_type)) => ForumEvent::global(
                "commentVoted",
                serde_json::json!({
                    "commentId": target.id,
                    "voteType": vote_type,
                    "userId": user_id,
                }),
            ),
            (TargetKind::Comment, None) => ForumEvent::global(
                "commentUnvoted",
                serde_json::json!({ "commentId": target.id, "userId": user_id }),
            ),
        };
        self.event_bus.publish(event);
    }

    /// The vote row is already committed at this point; a failed
    /// notification is logged, not surfaced.
    async fn notify_target_author(
        &self,
        user_id: Uuid,
        target: VoteTarget,
        receipt: &VoteReceipt,
        vote_type: VoteType,
    ) {
        let voter_name = match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => user.username,
            Ok(None) => "Someone".to_string(),
            Err(e) => {
                tracing::warn!("Could not resolve voter {} for notification: {}", user_id, e);
                return;
            }
        };

        let verb = match vote_type {
            VoteType::Up => "upvoted",
            VoteType::Down => "downvoted",
        };
        let (notification_type, noun, comment_id) = match target.kind {
            TargetKind::Post => (NotificationType::PostVote, "post", None),
            TargetKind::Comment => (NotificationType::CommentVote, "comment", Some(target.id)),
        };

        let command = NotifyCommand {
            notification_type,
            recipient_id: receipt.target_author,
            triggerer_id: Some(user_id),
            message: format!("{} {} your {}", voter_name, verb, noun),
            post_id: Some(receipt.post_id),
            comment_id,
        };

        if let Err(e) = self.notifier.execute(command).await {
            tracing::warn!("Vote notification failed for target {}: {}", target.id, e);
        }
    }
}

#[async_trait]
impl<L> IApplyVoteUseCase for ApplyVoteService<L>
where
    L: VoteLedger,
{
    async fn execute(
        &self,
        user_id: Uuid,
        target: VoteTarget,
        action: VoteAction,
    ) -> Result<ApplyVoteResult, ApplyVoteError> {
        let receipt = self.ledger.apply(user_id, target, action).await.map_err(
            |e| match e {
                VoteLedgerError::TargetNotFound => ApplyVoteError::TargetNotFound,
                VoteLedgerError::DatabaseError(msg) => ApplyVoteError::StoreFailure(msg),
            },
        )?;

        let message = match receipt.outcome {
            VoteOutcome::Created(_) => "Vote recorded",
            VoteOutcome::Changed { .. } => "Vote updated",
            VoteOutcome::Removed => "Vote removed",
            VoteOutcome::NoOp => "No vote to remove",
        };

        if receipt.outcome != VoteOutcome::NoOp {
            self.broadcast(user_id, target, receipt.outcome);

            if let Some(vote_type) = receipt.outcome.resulting_vote() {
                self.notify_target_author(user_id, target, &receipt, vote_type)
                    .await;
            }
        }

        Ok(ApplyVoteResult {
            outcome: receipt.outcome,
            message,
        })
    }
}
