use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a stored vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteType {
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => "UP",
            VoteType::Down => "DOWN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "UP" => Some(VoteType::Up),
            "DOWN" => Some(VoteType::Down),
            _ => None,
        }
    }
}

/// What a vote attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Post,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoteTarget {
    pub kind: TargetKind,
    pub id: Uuid,
}

impl VoteTarget {
    pub fn post(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Post,
            id,
        }
    }

    pub fn comment(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Comment,
            id,
        }
    }
}

/// Action requested by the client. `Remove` clears any existing vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Up,
    Down,
    Remove,
}

impl VoteAction {
    /// Request bodies carry `"UP"`, `"DOWN"` or `"remove"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "UP" => Some(VoteAction::Up),
            "DOWN" => Some(VoteAction::Down),
            "remove" => Some(VoteAction::Remove),
            _ => None,
        }
    }
}

/// Result of applying a vote action against the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Created(VoteType),
    Changed { from: VoteType, to: VoteType },
    Removed,
    NoOp,
}

impl VoteOutcome {
    /// The caller's stance after the action, if any.
    pub fn resulting_vote(&self) -> Option<VoteType> {
        match self {
            VoteOutcome::Created(t) => Some(*t),
            VoteOutcome::Changed { to, .. } => Some(*to),
            VoteOutcome::Removed | VoteOutcome::NoOp => None,
        }
    }
}

/// Single write decided by the toggle rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerWrite {
    Insert(VoteType),
    Update(VoteType),
    Delete,
    Nothing,
}

/// The 3-state toggle: repeating an identical vote clears it, a different
/// vote replaces it, `Remove` is idempotent.
pub fn decide(existing: Option<VoteType>, action: VoteAction) -> (LedgerWrite, VoteOutcome) {
    match (existing, action) {
        (Some(_), VoteAction::Remove) => (LedgerWrite::Delete, VoteOutcome::Removed),
        (None, VoteAction::Remove) => (LedgerWrite::Nothing, VoteOutcome::NoOp),
        (None, VoteAction::Up) => (LedgerWrite::Insert(VoteType::Up), VoteOutcome::Created(VoteType::Up)),
        (None, VoteAction::Down) => (
            LedgerWrite::Insert(VoteType::Down),
            VoteOutcome::Created(VoteType::Down),
        ),
        (Some(current), VoteAction::Up) => {
            if current == VoteType::Up {
                (LedgerWrite::Delete, VoteOutcome::Removed)
            } else {
                (
                    LedgerWrite::Update(VoteType::Up),
                    VoteOutcome::Changed {
                        from: current,
                        to: VoteType::Up,
                    },
                )
            }
        }
        (Some(current), VoteAction::Down) => {
            if current == VoteType::Down {
                (LedgerWrite::Delete, VoteOutcome::Removed)
            } else {
                (
                    LedgerWrite::Update(VoteType::Down),
                    VoteOutcome::Changed {
                        from: current,
                        to: VoteType::Down,
                    },
                )
            }
        }
    }
}

/// Aggregated counts for one target plus the viewer's own stance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    pub upvotes: i64,
    pub downvotes: i64,
    pub user_vote: Option<VoteType>,
}
