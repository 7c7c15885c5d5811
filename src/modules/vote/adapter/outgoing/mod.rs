pub mod sea_orm_entity;
pub mod vote_aggregator_postgres;
pub mod vote_ledger_postgres;

pub use vote_aggregator_postgres::VoteAggregatorPostgres;
pub use vote_ledger_postgres::VoteLedgerPostgres;
