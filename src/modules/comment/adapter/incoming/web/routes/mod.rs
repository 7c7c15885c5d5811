pub mod create_comment;
pub mod delete_comment;
pub mod fetch_comment;
pub mod list_comments;

pub use create_comment::create_comment_handler;
pub use delete_comment::delete_comment_handler;
pub use fetch_comment::fetch_comment_handler;
pub use list_comments::list_comments_handler;
