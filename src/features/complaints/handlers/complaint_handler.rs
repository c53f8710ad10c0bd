use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::complaints::dtos::{
    ComplaintResponseDto, CreateComplaintDto, UpdateComplaintDto,
};
use crate::features::complaints::services::ComplaintService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List complaints. Students see their own; staff see everything.
#[utoipa::path(
    get,
    path = "/api/complaints",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of complaints", body = ApiResponse<Vec<ComplaintResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "complaints"
)]
pub async fn list_complaints(
    user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ComplaintResponseDto>>>> {
    if user.is_staff() {
        let (complaints, total) = service.list(&pagination).await?;
        return Ok(Json(ApiResponse::success(
            Some(complaints),
            None,
            Some(Meta { total }),
        )));
    }

    let complaints = service.list_by_student(user.id).await?;
    let total = complaints.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(complaints),
        None,
        Some(Meta { total }),
    )))
}

/// Get complaint by ID
#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint found", body = ApiResponse<ComplaintResponseDto>),
        (status = 404, description = "Complaint not found")
    ),
    security(("bearer_auth" = [])),
    tag = "complaints"
)]
pub async fn get_complaint(
    user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    let complaint = service.get_by_id(id).await?;

    // A student may only read their own complaint
    if !user.is_staff() && complaint.student_id != Some(user.id) {
        return Err(AppError::Forbidden(
            "You cannot view another student's complaint".to_string(),
        ));
    }

    Ok(Json(ApiResponse::success(Some(complaint), None, None)))
}

/// File a new complaint (students)
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 200, description = "Complaint created", body = ApiResponse<ComplaintResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "complaints"
)]
pub async fn create_complaint(
    user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    AppJson(data): AppJson<CreateComplaintDto>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = service.create(user.id, data).await?;
    Ok(Json(ApiResponse::success(Some(complaint), None, None)))
}

/// Patch a complaint (staff; status, category and deadline only)
#[utoipa::path(
    patch,
    path = "/api/complaints/{id}",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    request_body = UpdateComplaintDto,
    responses(
        (status = 200, description = "Complaint updated", body = ApiResponse<ComplaintResponseDto>),
        (status = 403, description = "Not a staff member"),
        (status = 404, description = "Complaint not found")
    ),
    security(("bearer_auth" = [])),
    tag = "complaints"
)]
pub async fn update_complaint(
    user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<i64>,
    AppJson(data): AppJson<UpdateComplaintDto>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can update complaints".to_string(),
        ));
    }

    let complaint = service.update(id, data).await?;
    Ok(Json(ApiResponse::success(Some(complaint), None, None)))
}

/// Delete a complaint (administrative escape hatch)
#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    params(
        ("id" = i64, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Complaint not found")
    ),
    security(("bearer_auth" = [])),
    tag = "complaints"
)]
pub async fn delete_complaint(
    user: AuthenticatedUser,
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    if !user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can delete complaints".to_string(),
        ));
    }

    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Complaint deleted".to_string()),
        None,
    )))
}
