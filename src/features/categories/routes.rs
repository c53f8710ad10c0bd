use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::handlers::category_handler;
use crate::features::categories::services::CategoryService;

/// Public category routes (listing is used by the complaint form before login)
pub fn public_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(category_handler::list_categories))
        .route("/api/categories/{id}", get(category_handler::get_category))
        .with_state(service)
}

/// Protected category routes (creation requires a staff token)
pub fn protected_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", post(category_handler::create_category))
        .with_state(service)
}
