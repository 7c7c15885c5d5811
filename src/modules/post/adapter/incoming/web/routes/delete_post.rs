use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::services::delete_post::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_post_use_case
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::ok_message("Post deleted"),
        Err(DeletePostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(DeletePostError::NotAuthor) => {
            ApiResponse::forbidden("NOT_AUTHOR", "Only the author can delete this post")
        }
        Err(DeletePostError::RepositoryError(e)) => {
            tracing::error!("Failed to delete post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::post::application::services::delete_post::IDeletePostUseCase;
    use crate::tests::support::{auth_headers, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockDeletePost {
        result: Result<(), DeletePostError>,
    }

    #[async_trait]
    impl IDeletePostUseCase for MockDeletePost {
        async fn execute(&self, _user_id: Uuid, _post_id: Uuid) -> Result<(), DeletePostError> {
            self.result.clone()
        }
    }

    async fn call_delete(result: Result<(), DeletePostError>) -> actix_web::http::StatusCode {
        let app_state = TestAppStateBuilder::default()
            .with_delete_post(MockDeletePost { result })
            .build();
        let (provider, blacklist, token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(delete_post_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_delete_post_succeeds_for_author() {
        assert_eq!(call_delete(Ok(())).await, actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_delete_post_maps_not_author_to_forbidden() {
        assert_eq!(
            call_delete(Err(DeletePostError::NotAuthor)).await,
            actix_web::http::StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_delete_post_maps_missing_post() {
        assert_eq!(
            call_delete(Err(DeletePostError::PostNotFound)).await,
            actix_web::http::StatusCode::NOT_FOUND
        );
    }
}
