pub mod post_tags;
pub mod posts;
pub mod saved_posts;
pub mod tags;
