use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::vote::application::domain::entities::{TargetKind, VoteSummary, VoteTarget};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoteAggregatorError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Derives vote counts and the viewer's own stance from raw ledger rows.
/// Counts are never read from a denormalized counter.
#[async_trait]
pub trait VoteAggregator: Send + Sync {
    async fn summary(
        &self,
        target: VoteTarget,
        viewer: Option<Uuid>,
    ) -> Result<VoteSummary, VoteAggregatorError>;

    /// Batch mode: one grouped count query plus one viewer-vote lookup,
    /// regardless of how many ids are passed. Ids absent from the result
    /// map simply have no votes.
    async fn summaries(
        &self,
        kind: TargetKind,
        ids: &[Uuid],
        viewer: Option<Uuid>,
    ) -> Result<HashMap<Uuid, VoteSummary>, VoteAggregatorError>;
}
