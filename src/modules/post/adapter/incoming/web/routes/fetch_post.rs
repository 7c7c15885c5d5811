use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::post::application::services::fetch_post::FetchPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/posts/{id}")]
pub async fn fetch_post_handler(
    viewer: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_post_use_case
        .execute(path.into_inner(), viewer.user_id)
        .await
    {
        Ok(detail) => ApiResponse::success(detail),
        Err(FetchPostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(FetchPostError::QueryError(e)) => {
            tracing::error!("Failed to fetch post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
