use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::report::application::services::fetch_reports::FetchReportsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_fetch_reports_error(error: FetchReportsError) -> HttpResponse {
    match error {
        FetchReportsError::Forbidden => {
            ApiResponse::forbidden("MODERATOR_REQUIRED", "Moderator role required")
        }
        FetchReportsError::ReportNotFound => {
            ApiResponse::not_found("REPORT_NOT_FOUND", "Report not found")
        }
        FetchReportsError::QueryError(e) => {
            tracing::error!("Failed to fetch reports: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/reports")]
pub async fn list_reports_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_reports_use_case.list_all(user.role).await {
        Ok(views) => ApiResponse::success(views),
        Err(e) => map_fetch_reports_error(e),
    }
}

#[get("/api/reports/{id}")]
pub async fn fetch_report_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_reports_use_case
        .find(user.role, path.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => map_fetch_reports_error(e),
    }
}
