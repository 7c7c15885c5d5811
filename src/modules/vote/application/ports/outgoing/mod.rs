pub mod vote_aggregator;
pub mod vote_ledger;

pub use vote_aggregator::{VoteAggregator, VoteAggregatorError};
pub use vote_ledger::{VoteLedger, VoteLedgerError, VoteReceipt};
