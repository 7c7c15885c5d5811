pub mod bookmark_post;
pub mod create_post;
pub mod delete_post;
pub mod fetch_post;
pub mod list_posts;
