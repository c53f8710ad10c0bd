use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{StaffDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_users(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    Ok(Json(ApiResponse::success(Some(users), None, None)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_user(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// List staff members (lecturers, admins, complaint coordinators)
#[utoipa::path(
    get,
    path = "/api/users/staff",
    responses(
        (status = 200, description = "List of staff members", body = ApiResponse<Vec<StaffDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_staff(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<StaffDto>>>> {
    let staff = service.list_staff().await?;
    Ok(Json(ApiResponse::success(Some(staff), None, None)))
}
