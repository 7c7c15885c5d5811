use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::post::application::services::create_post::{
    CreatePostCommand, CreatePostError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn map_create_post_error(error: CreatePostError) -> HttpResponse {
    match error {
        CreatePostError::InvalidTitle
        | CreatePostError::InvalidContent
        | CreatePostError::TooManyTags => {
            ApiResponse::bad_request("VALIDATION_ERROR", &error.to_string())
        }
        CreatePostError::AuthorNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "Author not found")
        }
        CreatePostError::RepositoryError(e) => {
            tracing::error!("Failed to create post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    body: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let command = match CreatePostCommand::new(body.title, body.content, body.tags) {
        Ok(command) => command,
        Err(e) => return map_create_post_error(e),
    };

    match data
        .create_post_use_case
        .execute(user.user_id, command)
        .await
    {
        Ok(view) => ApiResponse::created(view),
        Err(e) => map_create_post_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
    use crate::modules::post::application::domain::entities::PostView;
    use crate::modules::post::application::services::create_post::ICreatePostUseCase;
    use crate::modules::vote::application::domain::entities::VoteSummary;
    use crate::tests::support::{auth_headers, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockCreatePost;

    #[async_trait]
    impl ICreatePostUseCase for MockCreatePost {
        async fn execute(
            &self,
            author_id: Uuid,
            _command: CreatePostCommand,
        ) -> Result<PostView, CreatePostError> {
            Ok(PostView {
                id: Uuid::new_v4(),
                title: "A fresh post".to_string(),
                content: Some("Some content that is long enough".to_string()),
                excerpt: "Some content that is long enough".to_string(),
                author: AuthorSummary {
                    id: author_id,
                    username: "author".to_string(),
                    avatar: None,
                    role: Role::User,
                },
                tags: vec!["rust".to_string()],
                votes: VoteSummary::default(),
                comment_count: 0,
                is_bookmarked: false,
                created_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn test_create_post_returns_created_view() {
        let app_state = TestAppStateBuilder::default()
            .with_create_post(MockCreatePost)
            .build();
        let (provider, blacklist, token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(create_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "title": "A fresh post",
                "content": "Some content that is long enough",
                "tags": ["rust"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "A fresh post");
    }

    #[actix_web::test]
    async fn test_create_post_rejects_short_title() {
        let app_state = TestAppStateBuilder::default()
            .with_create_post(MockCreatePost)
            .build();
        let (provider, blacklist, token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(create_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "title": "x",
                "content": "Some content that is long enough"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_create_post_requires_authentication() {
        let app_state = TestAppStateBuilder::default()
            .with_create_post(MockCreatePost)
            .build();
        let (provider, blacklist, _token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(create_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "title": "A fresh post",
                "content": "Some content that is long enough"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
