use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::notifications::models::Notification;

/// Response DTO for notification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponseDto {
    pub id: i64,
    pub recipient_id: i64,
    pub complaint_id: Option<i64>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponseDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            recipient_id: n.recipient_id,
            complaint_id: n.complaint_id,
            message: n.message,
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

/// Request DTO for a direct notification (staff announcements)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationDto {
    #[validate(range(min = 1, message = "recipient_id must be positive"))]
    pub recipient_id: i64,

    pub complaint_id: Option<i64>,

    #[validate(length(min = 1, max = 500, message = "Message must be 1-500 characters"))]
    pub message: String,
}

/// Request DTO for batch mark-as-read
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MarkReadDto {
    #[validate(length(min = 1, message = "At least one notification id is required"))]
    pub ids: Vec<i64>,
}

/// Response DTO for batch mark-as-read
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MarkReadResultDto {
    /// Rows actually flipped; ids that were unknown, already read, or
    /// someone else's are not counted
    pub updated: u64,
}
