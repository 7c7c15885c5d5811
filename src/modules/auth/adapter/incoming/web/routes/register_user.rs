use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn map_register_error(error: RegisterUserError) -> HttpResponse {
    match error {
        RegisterUserError::InvalidEmail
        | RegisterUserError::InvalidUsername
        | RegisterUserError::WeakPassword => {
            ApiResponse::bad_request("VALIDATION_ERROR", &error.to_string())
        }
        RegisterUserError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_EXISTS", "Email already exists")
        }
        RegisterUserError::UsernameAlreadyExists => {
            ApiResponse::conflict("USERNAME_EXISTS", "Username already exists")
        }
        RegisterUserError::HashingFailed(e) | RegisterUserError::RepositoryError(e) => {
            tracing::error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/auth/register")]
pub async fn register_user_handler(
    body: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let command = match RegisterUserCommand::new(body.username, body.email, body.password) {
        Ok(command) => command,
        Err(e) => return map_register_error(e),
    };

    match data.register_user_use_case.execute(command).await {
        Ok(user) => {
            tracing::info!("New account registered: {}", user.username);
            ApiResponse::created_message(
                "Registration successful. Check your email to verify your account.",
            )
        }
        Err(e) => map_register_error(e),
    }
}
