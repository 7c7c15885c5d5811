use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::application::use_cases::login_user::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn map_login_error(error: LoginError) -> HttpResponse {
    match error {
        LoginError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::EmailNotVerified => ApiResponse::forbidden(
            "EMAIL_NOT_VERIFIED",
            "Verify your email before logging in",
        ),
        LoginError::PasswordVerificationFailed(e)
        | LoginError::TokenGenerationFailed(e)
        | LoginError::QueryError(e) => {
            tracing::error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/auth/login")]
pub async fn login_user_handler(
    body: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .login_user_use_case
        .execute(&body.email, &body.password)
        .await
    {
        Ok(output) => ApiResponse::success(output),
        Err(e) => map_login_error(e),
    }
}
