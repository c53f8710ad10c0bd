use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::assignments::dtos::{AssignmentResponseDto, CreateAssignmentDto};
use crate::features::assignments::models::NewAssignment;
use crate::features::assignments::services::AssignmentService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// Manually route a complaint to a staff member (staff only)
#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = CreateAssignmentDto,
    responses(
        (status = 200, description = "Assignment created", body = ApiResponse<AssignmentResponseDto>),
        (status = 403, description = "Not a staff member"),
        (status = 422, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "assignments"
)]
pub async fn create_assignment(
    user: AuthenticatedUser,
    State(service): State<Arc<AssignmentService>>,
    AppJson(data): AppJson<CreateAssignmentDto>,
) -> Result<Json<ApiResponse<AssignmentResponseDto>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can assign complaints".to_string(),
        ));
    }

    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let assignment = service
        .create(NewAssignment {
            complaint_id: data.complaint_id,
            assigned_to: data.assigned_to,
            assigned_by: user.id,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        Some(assignment.into()),
        Some("Complaint assigned".to_string()),
        None,
    )))
}

/// List the complaints routed to the requesting staff member
#[utoipa::path(
    get,
    path = "/api/assignments/mine",
    responses(
        (status = 200, description = "Assignments routed to the caller", body = ApiResponse<Vec<AssignmentResponseDto>>),
        (status = 403, description = "Not a staff member")
    ),
    security(("bearer_auth" = [])),
    tag = "assignments"
)]
pub async fn list_my_assignments(
    user: AuthenticatedUser,
    State(service): State<Arc<AssignmentService>>,
) -> Result<Json<ApiResponse<Vec<AssignmentResponseDto>>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can view assignments".to_string(),
        ));
    }

    let assignments = service.list_by_assignee(user.id).await?;
    let dtos: Vec<AssignmentResponseDto> = assignments.into_iter().map(|a| a.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List the assignments for a complaint (staff only)
#[utoipa::path(
    get,
    path = "/api/complaints/{id}/assignments",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Assignments for the complaint", body = ApiResponse<Vec<AssignmentResponseDto>>),
        (status = 403, description = "Not a staff member")
    ),
    security(("bearer_auth" = [])),
    tag = "assignments"
)]
pub async fn list_complaint_assignments(
    user: AuthenticatedUser,
    State(service): State<Arc<AssignmentService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<AssignmentResponseDto>>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can view assignments".to_string(),
        ));
    }

    let assignments = service.list_by_complaint(id).await?;
    let dtos: Vec<AssignmentResponseDto> = assignments.into_iter().map(|a| a.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
