use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::fetch_current_user::FetchCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_fetch_error(error: FetchCurrentUserError) -> HttpResponse {
    match error {
        FetchCurrentUserError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        FetchCurrentUserError::QueryError(e) => {
            tracing::error!("Current user lookup failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/auth/me")]
pub async fn current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_current_user_use_case.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => map_fetch_error(e),
    }
}
