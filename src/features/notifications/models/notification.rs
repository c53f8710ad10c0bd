use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an in-app notification
#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: i64,
    pub recipient_id: i64,
    pub complaint_id: Option<i64>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new notification
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub recipient_id: i64,
    pub complaint_id: Option<i64>,
    pub message: String,
}
