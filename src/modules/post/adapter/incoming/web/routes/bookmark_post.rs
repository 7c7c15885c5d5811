use actix_web::{delete, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::services::bookmark_post::{BookmarkError, BookmarkResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_bookmark_error(error: BookmarkError) -> HttpResponse {
    match error {
        BookmarkError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        BookmarkError::RepositoryError(e) => {
            tracing::error!("Bookmark operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn bookmark_message(result: BookmarkResult) -> &'static str {
    match (result.bookmarked, result.changed) {
        (true, true) => "Post saved",
        (true, false) => "Post was already saved",
        (false, true) => "Post unsaved",
        (false, false) => "Post was not saved",
    }
}

#[post("/api/posts/{id}/save")]
pub async fn save_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .bookmark_post_use_case
        .save(user.user_id, path.into_inner())
        .await
    {
        Ok(result) => ApiResponse::ok_message(bookmark_message(result)),
        Err(e) => map_bookmark_error(e),
    }
}

#[delete("/api/posts/{id}/save")]
pub async fn unsave_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .bookmark_post_use_case
        .unsave(user.user_id, path.into_inner())
        .await
    {
        Ok(result) => ApiResponse::ok_message(bookmark_message(result)),
        Err(e) => map_bookmark_error(e),
    }
}
