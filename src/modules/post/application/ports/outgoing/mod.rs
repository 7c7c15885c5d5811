pub mod bookmark_repository;
pub mod post_query;
pub mod post_repository;

pub use bookmark_repository::{BookmarkRepository, BookmarkRepositoryError};
pub use post_query::{PostQuery, PostQueryError};
pub use post_repository::{PostRepository, PostRepositoryError};
