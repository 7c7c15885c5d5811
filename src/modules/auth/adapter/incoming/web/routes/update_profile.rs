use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::update_profile::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

fn map_update_error(error: UpdateProfileError) -> HttpResponse {
    match error {
        UpdateProfileError::InvalidUsername => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Username must be between 3 and 20 characters",
        ),
        UpdateProfileError::UsernameAlreadyExists => {
            ApiResponse::conflict("USERNAME_EXISTS", "Username is already taken")
        }
        UpdateProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateProfileError::RepositoryError(e) => {
            tracing::error!("Profile update failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/users/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();
    let command = match UpdateProfileCommand::new(request.username, request.bio, request.avatar) {
        Ok(command) => command,
        Err(e) => return map_update_error(e),
    };

    match data
        .update_profile_use_case
        .execute(user.user_id, command)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => map_update_error(e),
    }
}
