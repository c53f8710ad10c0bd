use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::workflow::handlers::workflow_handler;
use crate::features::workflow::services::WorkflowService;

pub fn routes(service: Arc<WorkflowService>) -> Router {
    Router::new()
        .route(
            "/api/complaints/{id}/resolution",
            post(workflow_handler::submit_resolution),
        )
        .route(
            "/api/complaints/{id}/resolve",
            post(workflow_handler::mark_resolved),
        )
        .with_state(service)
}
