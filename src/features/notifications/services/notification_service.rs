use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::notifications::models::{NewNotification, Notification};

const NOTIFICATION_COLUMNS: &str = "\
    id, recipient_id, complaint_id, message, is_read, created_at";

/// Service for notification persistence
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a notification for a recipient
    pub async fn create(&self, data: NewNotification) -> Result<Notification> {
        let query = format!(
            "INSERT INTO notifications (recipient_id, complaint_id, message) \
             VALUES ($1, $2, $3) \
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(data.recipient_id)
            .bind(data.complaint_id)
            .bind(&data.message)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create notification: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Notifications for a recipient, newest first
    pub async fn list_by_recipient(&self, recipient_id: i64) -> Result<Vec<Notification>> {
        let query = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications \
             WHERE recipient_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(recipient_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list notifications: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Mark a batch of the recipient's notifications as read. IDs that do
    /// not exist or belong to someone else are silently ignored; returns
    /// the number of rows actually updated.
    pub async fn mark_read(&self, recipient_id: i64, ids: &[i64]) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE \
             WHERE recipient_id = $1 AND id = ANY($2) AND is_read = FALSE",
        )
        .bind(recipient_id)
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark notifications read: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected())
    }
}
