pub mod bookmark_post;
pub mod create_post;
pub mod delete_post;
pub mod fetch_post;
pub mod list_posts;

pub use bookmark_post::{save_post_handler, unsave_post_handler};
pub use create_post::create_post_handler;
pub use delete_post::delete_post_handler;
pub use fetch_post::fetch_post_handler;
pub use list_posts::list_posts_handler;
