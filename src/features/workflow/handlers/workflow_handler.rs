use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::workflow::dtos::{SubmitResolutionDto, WorkflowReportDto};
use crate::features::workflow::services::WorkflowService;
use crate::shared::types::ApiResponse;

/// Submit a resolution for a complaint. The action taken depends on the
/// caller's workflow role: lecturers and generic admins write marks and
/// assign staff, the finance office replies with a comment, and the
/// registrar's office approves the pending resolution.
#[utoipa::path(
    post,
    path = "/api/complaints/{id}/resolution",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    request_body = SubmitResolutionDto,
    responses(
        (status = 200, description = "Action executed; skipped fan-out items are reported", body = ApiResponse<WorkflowReportDto>),
        (status = 403, description = "Caller has no workflow role"),
        (status = 404, description = "Complaint not found"),
        (status = 409, description = "Complaint already resolved or nothing to review"),
        (status = 422, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "workflow"
)]
pub async fn submit_resolution(
    user: AuthenticatedUser,
    State(service): State<Arc<WorkflowService>>,
    Path(id): Path<i64>,
    AppJson(data): AppJson<SubmitResolutionDto>,
) -> Result<Json<ApiResponse<WorkflowReportDto>>> {
    let report = service.submit_resolution(&user, id, data).await?;
    Ok(Json(ApiResponse::success(
        Some(report),
        Some("Resolution submitted".to_string()),
        None,
    )))
}

/// Mark a complaint resolved outright (Registrar's Office only)
#[utoipa::path(
    post,
    path = "/api/complaints/{id}/resolve",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint resolved", body = ApiResponse<WorkflowReportDto>),
        (status = 403, description = "Caller is not at the Registrar's Office"),
        (status = 404, description = "Complaint not found"),
        (status = 409, description = "Complaint already resolved")
    ),
    security(("bearer_auth" = [])),
    tag = "workflow"
)]
pub async fn mark_resolved(
    user: AuthenticatedUser,
    State(service): State<Arc<WorkflowService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<WorkflowReportDto>>> {
    let report = service.mark_resolved(&user, id).await?;
    Ok(Json(ApiResponse::success(
        Some(report),
        Some("Complaint marked resolved".to_string()),
        None,
    )))
}
