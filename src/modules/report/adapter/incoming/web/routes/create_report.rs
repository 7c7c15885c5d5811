use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::report::application::services::create_report::{
    CreateReportCommand, CreateReportError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub reason: String,
    pub details: Option<String>,
    pub post_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
}

fn map_create_report_error(error: CreateReportError) -> HttpResponse {
    match error {
        CreateReportError::InvalidReason => {
            ApiResponse::bad_request("VALIDATION_ERROR", &error.to_string())
        }
        CreateReportError::InvalidTarget => ApiResponse::bad_request(
            "INVALID_TARGET",
            "A report must reference exactly one post or comment",
        ),
        CreateReportError::TargetNotFound => {
            ApiResponse::not_found("TARGET_NOT_FOUND", "Report target not found")
        }
        CreateReportError::ReporterNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "Reporter not found")
        }
        CreateReportError::RepositoryError(e) => {
            tracing::error!("Failed to create report: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/reports")]
pub async fn create_report_handler(
    user: AuthenticatedUser,
    body: web::Json<CreateReportRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let command =
        match CreateReportCommand::new(body.reason, body.details, body.post_id, body.comment_id) {
            Ok(command) => command,
            Err(e) => return map_create_report_error(e),
        };

    match data
        .create_report_use_case
        .execute(user.user_id, command)
        .await
    {
        Ok(view) => ApiResponse::created(view),
        Err(e) => map_create_report_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{AuthorSummary, Role};
    use crate::modules::report::application::domain::entities::{ReportStatus, ReportView};
    use crate::modules::report::application::services::create_report::ICreateReportUseCase;
    use crate::tests::support::{auth_headers, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockCreateReport {
        result: Result<(), CreateReportError>,
    }

    #[async_trait]
    impl ICreateReportUseCase for MockCreateReport {
        async fn execute(
            &self,
            reporter_id: Uuid,
            _command: CreateReportCommand,
        ) -> Result<ReportView, CreateReportError> {
            self.result.clone()?;
            Ok(ReportView {
                id: Uuid::new_v4(),
                reason: "Spam".to_string(),
                details: None,
                reporter: AuthorSummary {
                    id: reporter_id,
                    username: "reporter".to_string(),
                    avatar: None,
                    role: Role::User,
                },
                post_id: Some(Uuid::new_v4()),
                comment_id: None,
                status: ReportStatus::Pending,
                created_at: Utc::now(),
            })
        }
    }

    async fn call_create(
        result: Result<(), CreateReportError>,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_create_report(MockCreateReport { result })
            .build();
        let (provider, blacklist, token) = auth_headers();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider)
                .app_data(blacklist)
                .service(create_report_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reports")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_create_report_returns_pending_view() {
        let resp = call_create(
            Ok(()),
            serde_json::json!({"reason": "Spam", "postId": Uuid::new_v4()}),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "pending");
    }

    #[actix_web::test]
    async fn test_create_report_rejects_double_target() {
        let resp = call_create(
            Ok(()),
            serde_json::json!({
                "reason": "Spam",
                "postId": Uuid::new_v4(),
                "commentId": Uuid::new_v4()
            }),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TARGET");
    }

    #[actix_web::test]
    async fn test_create_report_maps_missing_target() {
        let resp = call_create(
            Err(CreateReportError::TargetNotFound),
            serde_json::json!({"reason": "Spam", "postId": Uuid::new_v4()}),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
