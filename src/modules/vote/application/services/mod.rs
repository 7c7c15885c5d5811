pub mod apply_vote;

pub use apply_vote::{ApplyVoteError, ApplyVoteResult, ApplyVoteService, IApplyVoteUseCase};
