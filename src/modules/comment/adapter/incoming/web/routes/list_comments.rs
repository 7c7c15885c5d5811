use actix_web::{get, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::comment::application::services::list_comments::ListCommentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[get("/api/posts/{id}/comments")]
pub async fn list_comments_handler(
    viewer: MaybeUser,
    path: web::Path<Uuid>,
    query: web::Query<ListCommentsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).clamp(1, 100);

    match data
        .list_comments_use_case
        .execute(path.into_inner(), page, per_page, viewer.user_id)
        .await
    {
        Ok(comments) => ApiResponse::success(comments),
        Err(ListCommentsError::QueryError(e)) => {
            tracing::error!("Failed to list comments: {}", e);
            ApiResponse::internal_error()
        }
    }
}
