use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::features::complaints::handlers::complaint_handler;
use crate::features::complaints::services::ComplaintService;

/// Create routes for the complaints feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route("/api/complaints", get(complaint_handler::list_complaints))
        .route("/api/complaints", post(complaint_handler::create_complaint))
        .route("/api/complaints/{id}", get(complaint_handler::get_complaint))
        .route(
            "/api/complaints/{id}",
            patch(complaint_handler::update_complaint),
        )
        .route(
            "/api/complaints/{id}",
            delete(complaint_handler::delete_complaint),
        )
        .with_state(service)
}
