use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::resolutions::handlers::resolution_handler;
use crate::features::resolutions::services::ResolutionService;

pub fn routes(service: Arc<ResolutionService>) -> Router {
    Router::new()
        .route(
            "/api/resolutions",
            get(resolution_handler::list_resolutions).post(resolution_handler::create_resolution),
        )
        .route(
            "/api/resolutions/{id}",
            get(resolution_handler::get_resolution).patch(resolution_handler::update_resolution),
        )
        .with_state(service)
}
