use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::comment::application::services::delete_comment::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/comments/{id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_comment_use_case
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::ok_message("Comment deleted"),
        Err(DeleteCommentError::CommentNotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(DeleteCommentError::NotAuthor) => {
            ApiResponse::forbidden("NOT_AUTHOR", "Only the author can delete this comment")
        }
        Err(DeleteCommentError::RepositoryError(e)) => {
            tracing::error!("Failed to delete comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}
