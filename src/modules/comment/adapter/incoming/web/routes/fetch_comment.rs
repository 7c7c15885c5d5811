use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::comment::application::services::fetch_comment::FetchCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/comments/{id}")]
pub async fn fetch_comment_handler(
    viewer: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_comment_use_case
        .execute(path.into_inner(), viewer.user_id)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(FetchCommentError::CommentNotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(FetchCommentError::QueryError(e)) => {
            tracing::error!("Failed to fetch comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}
