use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::comment::application::services::create_comment::{
    CreateCommentCommand, CreateCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub parent_id: Option<Uuid>,
}

fn map_create_comment_error(error: CreateCommentError) -> HttpResponse {
    match error {
        CreateCommentError::InvalidContent => {
            ApiResponse::bad_request("VALIDATION_ERROR", &error.to_string())
        }
        CreateCommentError::PostNotFound => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        CreateCommentError::ParentNotFound => {
            ApiResponse::not_found("PARENT_NOT_FOUND", "Parent comment not found")
        }
        CreateCommentError::ParentPostMismatch => ApiResponse::bad_request(
            "PARENT_POST_MISMATCH",
            "Parent comment belongs to another post",
        ),
        CreateCommentError::AuthorNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "Author not found")
        }
        CreateCommentError::RepositoryError(e) => {
            tracing::error!("Failed to create comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/posts/{id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let command = match CreateCommentCommand::new(body.content, path.into_inner(), body.parent_id)
    {
        Ok(command) => command,
        Err(e) => return map_create_comment_error(e),
    };

    match data
        .create_comment_use_case
        .execute(user.user_id, command)
        .await
    {
        Ok(view) => ApiResponse::created(view),
        Err(e) => map_create_comment_error(e),
    }
}
