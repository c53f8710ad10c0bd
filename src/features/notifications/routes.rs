use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::notifications::handlers::notification_handler;
use crate::features::notifications::services::NotificationService;

pub fn routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route(
            "/api/notifications",
            get(notification_handler::list_notifications)
                .post(notification_handler::create_notification),
        )
        .route(
            "/api/notifications/mark-read",
            post(notification_handler::mark_read),
        )
        .with_state(service)
}
