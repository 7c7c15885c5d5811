pub mod stats;

pub use stats::{community_stats_handler, popular_tags_handler, recent_activity_handler};
