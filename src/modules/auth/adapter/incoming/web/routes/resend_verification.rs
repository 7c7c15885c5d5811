use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::application::use_cases::resend_verification::ResendVerificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

fn map_resend_error(error: ResendVerificationError) -> HttpResponse {
    match error {
        ResendVerificationError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "No account found for that email")
        }
        ResendVerificationError::AlreadyVerified => {
            ApiResponse::bad_request("ALREADY_VERIFIED", "Email is already verified")
        }
        ResendVerificationError::EmailSendFailed(e) => {
            tracing::error!("Verification email delivery failed: {}", e);
            ApiResponse::internal_error()
        }
        ResendVerificationError::RepositoryError(e) => {
            tracing::error!("Resend verification failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/auth/resend-verification")]
pub async fn resend_verification_handler(
    body: web::Json<ResendVerificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .resend_verification_use_case
        .execute(&body.email)
        .await
    {
        Ok(()) => ApiResponse::ok_message("Verification email sent"),
        Err(e) => map_resend_error(e),
    }
}
