use actix_web::{delete, get, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::notification::application::services::manage_notifications::ManageNotificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_notification_error(error: ManageNotificationError) -> HttpResponse {
    match error {
        ManageNotificationError::NotFound => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }
        ManageNotificationError::Forbidden => ApiResponse::forbidden(
            "NOT_RECIPIENT",
            "Notification belongs to another user",
        ),
        ManageNotificationError::StoreFailure(e) => {
            tracing::error!("Notification store failure: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/notifications")]
pub async fn list_notifications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.manage_notifications_use_case.list(user.user_id).await {
        Ok(views) => ApiResponse::success(views),
        Err(e) => map_notification_error(e),
    }
}

#[get("/api/notifications/unread-count")]
pub async fn unread_count_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .manage_notifications_use_case
        .unread_count(user.user_id)
        .await
    {
        Ok(count) => ApiResponse::success(json!({ "count": count })),
        Err(e) => map_notification_error(e),
    }
}

#[put("/api/notifications/{id}/read")]
pub async fn mark_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .manage_notifications_use_case
        .mark_read(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::ok_message("Notification marked as read"),
        Err(e) => map_notification_error(e),
    }
}

#[put("/api/notifications/read-all")]
pub async fn mark_all_read_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .manage_notifications_use_case
        .mark_all_read(user.user_id)
        .await
    {
        Ok(()) => ApiResponse::ok_message("All notifications marked as read"),
        Err(e) => map_notification_error(e),
    }
}

#[delete("/api/notifications/{id}")]
pub async fn delete_notification_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .manage_notifications_use_case
        .delete(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::ok_message("Notification deleted"),
        Err(e) => map_notification_error(e),
    }
}

#[delete("/api/notifications")]
pub async fn delete_all_notifications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .manage_notifications_use_case
        .delete_all(user.user_id)
        .await
    {
        Ok(()) => ApiResponse::ok_message("All notifications deleted"),
        Err(e) => map_notification_error(e),
    }
}
