pub mod create_comment;
pub mod delete_comment;
pub mod fetch_comment;
pub mod list_comments;
