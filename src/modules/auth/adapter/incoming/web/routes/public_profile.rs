use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::auth::application::use_cases::fetch_public_profile::FetchPublicProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_profile_error(error: FetchPublicProfileError) -> HttpResponse {
    match error {
        FetchPublicProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        FetchPublicProfileError::QueryError(e) => {
            tracing::error!("Public profile lookup failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/users/{username}")]
pub async fn public_profile_handler(
    path: web::Path<String>,
    viewer: MaybeUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    match data
        .fetch_public_profile_use_case
        .execute(&username, viewer.user_id)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_profile_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::UserView;
    use crate::modules::auth::application::use_cases::fetch_public_profile::{
        IFetchPublicProfileUseCase, PublicProfileView,
    };
    use crate::modules::auth::application::use_cases::test_support::sample_user;
    use crate::tests::support::{auth_headers, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockPublicProfile {
        found: bool,
    }

    #[async_trait]
    impl IFetchPublicProfileUseCase for MockPublicProfile {
        async fn execute(
            &self,
            username: &str,
            _viewer: Option<Uuid>,
        ) -> Result<PublicProfileView, FetchPublicProfileError> {
            if !self.found {
                return Err(FetchPublicProfileError::UserNotFound);
            }
            Ok(PublicProfileView {
                user: UserView::from(sample_user(username, "jane@example.com")),
                posts: vec![],
                comments: vec![],
                saved_posts: vec![],
                vote_count: 7,
                report_count: 0,
            })
        }
    }

    #[actix_web::test]
    async fn test_public_profile_is_visible_without_token() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_public_profile(MockPublicProfile { found: true })
            .build();
        let (provider, blacklist, _token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(public_profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users/jane").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["username"], "jane");
        assert_eq!(body["data"]["voteCount"], 7);
    }

    #[actix_web::test]
    async fn test_unknown_username_returns_404() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_public_profile(MockPublicProfile { found: false })
            .build();
        let (provider, blacklist, _token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(public_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/nobody")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
