use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notifications::dtos::{
    CreateNotificationDto, MarkReadDto, MarkReadResultDto, NotificationResponseDto,
};
use crate::features::notifications::models::NewNotification;
use crate::features::notifications::services::NotificationService;
use crate::shared::types::ApiResponse;

/// List the caller's notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Caller's notifications", body = ApiResponse<Vec<NotificationResponseDto>>)
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn list_notifications(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
) -> Result<Json<ApiResponse<Vec<NotificationResponseDto>>>> {
    let notifications = service.list_by_recipient(user.id).await?;
    let dtos: Vec<NotificationResponseDto> =
        notifications.into_iter().map(|n| n.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Send a direct notification (staff only)
#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = CreateNotificationDto,
    responses(
        (status = 200, description = "Notification sent", body = ApiResponse<NotificationResponseDto>),
        (status = 403, description = "Not a staff member"),
        (status = 422, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn create_notification(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
    AppJson(data): AppJson<CreateNotificationDto>,
) -> Result<Json<ApiResponse<NotificationResponseDto>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can send notifications".to_string(),
        ));
    }

    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let notification = service
        .create(NewNotification {
            recipient_id: data.recipient_id,
            complaint_id: data.complaint_id,
            message: data.message,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        Some(notification.into()),
        Some("Notification sent".to_string()),
        None,
    )))
}

/// Mark a batch of the caller's notifications as read
#[utoipa::path(
    post,
    path = "/api/notifications/mark-read",
    request_body = MarkReadDto,
    responses(
        (status = 200, description = "Notifications marked read", body = ApiResponse<MarkReadResultDto>),
        (status = 422, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn mark_read(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
    AppJson(data): AppJson<MarkReadDto>,
) -> Result<Json<ApiResponse<MarkReadResultDto>>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.mark_read(user.id, &data.ids).await?;
    Ok(Json(ApiResponse::success(
        Some(MarkReadResultDto { updated }),
        None,
        None,
    )))
}
