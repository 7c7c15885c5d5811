use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_logout_error(error: LogoutError) -> HttpResponse {
    match error {
        LogoutError::InvalidToken => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        LogoutError::BlacklistFailure(e) => {
            tracing::error!("Logout failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_user_use_case.execute(&user.token).await {
        Ok(()) => ApiResponse::ok_message("Logged out"),
        Err(e) => map_logout_error(e),
    }
}
