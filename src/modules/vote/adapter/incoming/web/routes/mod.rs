pub mod apply_vote;

pub use apply_vote::{vote_comment_handler, vote_post_handler};
