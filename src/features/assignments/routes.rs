use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::assignments::handlers::assignment_handler;
use crate::features::assignments::services::AssignmentService;

pub fn routes(service: Arc<AssignmentService>) -> Router {
    Router::new()
        .route(
            "/api/assignments",
            post(assignment_handler::create_assignment),
        )
        .route(
            "/api/assignments/mine",
            get(assignment_handler::list_my_assignments),
        )
        .route(
            "/api/complaints/{id}/assignments",
            get(assignment_handler::list_complaint_assignments),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_own_assignment_listing_is_routed() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        let app = routes(Arc::new(AssignmentService::new(pool)));

        let response = app
            .oneshot(
                Request::get("/api/assignments/mine")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Unauthenticated, so the handler rejects; a 404 would mean the
        // path is not wired up at all.
        assert_ne!(response.status(), StatusCode::NOT_FOUND);
    }
}
