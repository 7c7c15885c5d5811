use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::{VoteAction, VoteOutcome, VoteTarget};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoteLedgerError {
    #[error("Vote target not found")]
    TargetNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// What the ledger learned about the target while applying the action.
/// `post_id` is the owning post for comment targets, the target itself
/// for post targets.
#[derive(Debug, Clone, Copy)]
pub struct VoteReceipt {
    pub outcome: VoteOutcome,
    pub target_author: Uuid,
    pub post_id: Uuid,
}

/// Append/mutate/delete one user's stance on one target. Implementations
/// must run the read-decide-write sequence atomically: a concurrent
/// duplicate insert is re-resolved through the toggle rule, never
/// surfaced as a conflict.
#[async_trait]
pub trait VoteLedger: Send + Sync {
    async fn apply(
        &self,
        user_id: Uuid,
        target: VoteTarget,
        action: VoteAction,
    ) -> Result<VoteReceipt, VoteLedgerError>;
}
