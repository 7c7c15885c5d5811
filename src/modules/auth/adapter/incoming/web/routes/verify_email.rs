use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::application::use_cases::verify_email::VerifyEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct VerifyEmailQuery {
    pub token: String,
    pub email: String,
}

fn map_verify_error(error: VerifyEmailError) -> HttpResponse {
    match error {
        VerifyEmailError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "No account found for that email")
        }
        VerifyEmailError::AlreadyVerified => {
            ApiResponse::bad_request("ALREADY_VERIFIED", "Email is already verified")
        }
        VerifyEmailError::InvalidToken => {
            ApiResponse::bad_request("INVALID_TOKEN", "Verification token is invalid")
        }
        VerifyEmailError::TokenExpired => {
            ApiResponse::bad_request("TOKEN_EXPIRED", "Verification token has expired")
        }
        VerifyEmailError::RepositoryError(e) => {
            tracing::error!("Email verification failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/auth/verify-email")]
pub async fn verify_email_handler(
    query: web::Query<VerifyEmailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .verify_email_use_case
        .execute(&query.email, &query.token)
        .await
    {
        Ok(()) => ApiResponse::ok_message("Email verified successfully"),
        Err(e) => map_verify_error(e),
    }
}
