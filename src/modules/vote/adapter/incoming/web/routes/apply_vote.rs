use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::vote::application::domain::entities::{VoteAction, VoteTarget};
use crate::modules::vote::application::services::apply_vote::ApplyVoteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct VoteRequest {
    pub vote: String,
}

fn map_vote_error(error: ApplyVoteError) -> HttpResponse {
    match error {
        ApplyVoteError::TargetNotFound => {
            ApiResponse::not_found("TARGET_NOT_FOUND", "Vote target not found")
        }
        ApplyVoteError::StoreFailure(e) => {
            tracing::error!("Vote failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

async fn handle_vote(
    user: AuthenticatedUser,
    target: VoteTarget,
    body: web::Json<VoteRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let Some(action) = VoteAction::parse(&body.vote) else {
        return ApiResponse::bad_request(
            "INVALID_VOTE_TYPE",
            "Vote must be \"UP\", \"DOWN\" or \"remove\"",
        );
    };

    match data
        .apply_vote_use_case
        .execute(user.user_id, target, action)
        .await
    {
        Ok(result) => ApiResponse::ok_message(result.message),
        Err(e) => map_vote_error(e),
    }
}

#[post("/api/posts/{id}/vote")]
pub async fn vote_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<VoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    handle_vote(user, VoteTarget::post(path.into_inner()), body, data).await
}

#[post("/api/comments/{id}/vote")]
pub async fn vote_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<VoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    handle_vote(user, VoteTarget::comment(path.into_inner()), body, data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::vote::application::domain::entities::{VoteOutcome, VoteType};
    use crate::modules::vote::application::services::apply_vote::{
        ApplyVoteResult, IApplyVoteUseCase,
    };
    use crate::tests::support::{auth_headers, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockApplyVote {
        result: Result<ApplyVoteResult, ApplyVoteError>,
        seen: Mutex<Vec<(VoteTarget, VoteAction)>>,
    }

    impl MockApplyVote {
        fn returning(result: Result<ApplyVoteResult, ApplyVoteError>) -> Self {
            Self {
                result,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IApplyVoteUseCase for MockApplyVote {
        async fn execute(
            &self,
            _user_id: Uuid,
            target: VoteTarget,
            action: VoteAction,
        ) -> Result<ApplyVoteResult, ApplyVoteError> {
            self.seen.lock().unwrap().push((target, action));
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_post_vote_returns_outcome_message() {
        let app_state = TestAppStateBuilder::default()
            .with_apply_vote(MockApplyVote::returning(Ok(ApplyVoteResult {
                outcome: VoteOutcome::Created(VoteType::Up),
                message: "Vote recorded",
            })))
            .build();
        let (provider, blacklist, token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(vote_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/vote", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({"vote": "UP"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Vote recorded");
    }

    #[actix_web::test]
    async fn test_invalid_vote_value_is_rejected() {
        let app_state = TestAppStateBuilder::default()
            .with_apply_vote(MockApplyVote::returning(Ok(ApplyVoteResult {
                outcome: VoteOutcome::NoOp,
                message: "No vote to remove",
            })))
            .build();
        let (provider, blacklist, token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(vote_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/comments/{}/vote", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({"vote": "sideways"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_VOTE_TYPE");
    }

    #[actix_web::test]
    async fn test_missing_target_returns_404() {
        let app_state = TestAppStateBuilder::default()
            .with_apply_vote(MockApplyVote::returning(Err(
                ApplyVoteError::TargetNotFound,
            )))
            .build();
        let (provider, blacklist, token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(vote_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/vote", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({"vote": "DOWN"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_vote_requires_authentication() {
        let app_state = TestAppStateBuilder::default()
            .with_apply_vote(MockApplyVote::returning(Err(
                ApplyVoteError::TargetNotFound,
            )))
            .build();
        let (provider, blacklist, _token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(vote_post_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/vote", Uuid::new_v4()))
            .set_json(serde_json::json!({"vote": "UP"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
