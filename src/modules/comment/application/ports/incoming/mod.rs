pub mod comment_tree;

pub use comment_tree::{CommentTreeError, ICommentTreeUseCase};
