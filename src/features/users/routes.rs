use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers::user_handler;
use crate::features::users::services::UserService;

/// Create routes for the users feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", get(user_handler::list_users))
        .route("/api/users/staff", get(user_handler::list_staff))
        .route("/api/users/{id}", get(user_handler::get_user))
        .with_state(service)
}
