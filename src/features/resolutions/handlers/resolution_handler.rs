use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::resolutions::dtos::{
    CreateResolutionDto, ResolutionResponseDto, UpdateResolutionDto,
};
use crate::features::resolutions::models::NewResolution;
use crate::features::resolutions::services::ResolutionService;
use crate::shared::types::ApiResponse;

/// List resolutions (staff only)
#[utoipa::path(
    get,
    path = "/api/resolutions",
    responses(
        (status = 200, description = "List of resolutions", body = ApiResponse<Vec<ResolutionResponseDto>>),
        (status = 403, description = "Not a staff member")
    ),
    security(("bearer_auth" = [])),
    tag = "resolutions"
)]
pub async fn list_resolutions(
    user: AuthenticatedUser,
    State(service): State<Arc<ResolutionService>>,
) -> Result<Json<ApiResponse<Vec<ResolutionResponseDto>>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can list resolutions".to_string(),
        ));
    }

    let resolutions = service.list().await?;
    let dtos: Vec<ResolutionResponseDto> = resolutions.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get resolution by ID
#[utoipa::path(
    get,
    path = "/api/resolutions/{id}",
    params(
        ("id" = i64, Path, description = "Resolution ID")
    ),
    responses(
        (status = 200, description = "Resolution found", body = ApiResponse<ResolutionResponseDto>),
        (status = 404, description = "Resolution not found")
    ),
    security(("bearer_auth" = [])),
    tag = "resolutions"
)]
pub async fn get_resolution(
    user: AuthenticatedUser,
    State(service): State<Arc<ResolutionService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ResolutionResponseDto>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can view resolutions".to_string(),
        ));
    }

    let resolution = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        Some(resolution.into()),
        None,
        None,
    )))
}

/// Create a resolution directly (staff; workflow-independent escape hatch)
#[utoipa::path(
    post,
    path = "/api/resolutions",
    request_body = CreateResolutionDto,
    responses(
        (status = 200, description = "Resolution created", body = ApiResponse<ResolutionResponseDto>),
        (status = 403, description = "Not a staff member"),
        (status = 409, description = "Complaint already has a resolution"),
        (status = 422, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "resolutions"
)]
pub async fn create_resolution(
    user: AuthenticatedUser,
    State(service): State<Arc<ResolutionService>>,
    AppJson(data): AppJson<CreateResolutionDto>,
) -> Result<Json<ApiResponse<ResolutionResponseDto>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can create resolutions".to_string(),
        ));
    }

    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let resolution = service
        .create(NewResolution {
            complaint_id: data.complaint_id,
            resolved_by: user.id,
            attendance_mark: data.attendance_mark,
            assignment_mark: data.assignment_mark,
            ca_mark: data.ca_mark,
            final_mark: data.final_mark,
            comments: data.comments,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        Some(resolution.into()),
        Some("Resolution created".to_string()),
        None,
    )))
}

/// Patch marks/comments directly (staff; workflow-independent escape hatch)
#[utoipa::path(
    patch,
    path = "/api/resolutions/{id}",
    params(
        ("id" = i64, Path, description = "Resolution ID")
    ),
    request_body = UpdateResolutionDto,
    responses(
        (status = 200, description = "Resolution updated", body = ApiResponse<ResolutionResponseDto>),
        (status = 403, description = "Not a staff member"),
        (status = 404, description = "Resolution not found")
    ),
    security(("bearer_auth" = [])),
    tag = "resolutions"
)]
pub async fn update_resolution(
    user: AuthenticatedUser,
    State(service): State<Arc<ResolutionService>>,
    Path(id): Path<i64>,
    AppJson(data): AppJson<UpdateResolutionDto>,
) -> Result<Json<ApiResponse<ResolutionResponseDto>>> {
    if !user.is_staff() {
        return Err(AppError::Forbidden(
            "Only staff can update resolutions".to_string(),
        ));
    }

    let resolution = service.update(id, data.into()).await?;
    Ok(Json(ApiResponse::success(
        Some(resolution.into()),
        None,
        None,
    )))
}
