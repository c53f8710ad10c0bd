use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::assignments::{dtos as assignments_dtos, handlers::assignment_handler};
use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers::category_handler};
use crate::features::complaints::{dtos as complaints_dtos, handlers::complaint_handler};
use crate::features::complaints::models::ComplaintStatus;
use crate::features::notifications::{dtos as notifications_dtos, handlers::notification_handler};
use crate::features::resolutions::{dtos as resolutions_dtos, handlers::resolution_handler};
use crate::features::users::models::UserRole;
use crate::features::users::{dtos as users_dtos, handlers::user_handler};
use crate::features::workflow::executor::{ExecutionReport, SkippedEffect};
use crate::features::workflow::policy::MarkField;
use crate::features::workflow::{dtos as workflow_dtos, handlers::workflow_handler};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        user_handler::list_users,
        user_handler::get_user,
        user_handler::list_staff,
        // Categories
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::create_category,
        // Complaints
        complaint_handler::list_complaints,
        complaint_handler::get_complaint,
        complaint_handler::create_complaint,
        complaint_handler::update_complaint,
        complaint_handler::delete_complaint,
        // Resolutions
        resolution_handler::list_resolutions,
        resolution_handler::get_resolution,
        resolution_handler::create_resolution,
        resolution_handler::update_resolution,
        // Assignments
        assignment_handler::create_assignment,
        assignment_handler::list_my_assignments,
        assignment_handler::list_complaint_assignments,
        // Notifications
        notification_handler::list_notifications,
        notification_handler::create_notification,
        notification_handler::mark_read,
        // Workflow
        workflow_handler::submit_resolution,
        workflow_handler::mark_resolved,
    ),
    components(
        schemas(
            // Shared
            Meta,
            auth::model::AuthenticatedUser,
            UserRole,
            ComplaintStatus,
            // Users
            users_dtos::UserResponseDto,
            users_dtos::ProfileDto,
            users_dtos::StaffDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::StaffDto>>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Complaints
            complaints_dtos::ComplaintResponseDto,
            complaints_dtos::AttachmentDto,
            complaints_dtos::CreateComplaintDto,
            complaints_dtos::UpdateComplaintDto,
            ApiResponse<Vec<complaints_dtos::ComplaintResponseDto>>,
            ApiResponse<complaints_dtos::ComplaintResponseDto>,
            // Resolutions
            resolutions_dtos::ResolutionResponseDto,
            resolutions_dtos::CreateResolutionDto,
            resolutions_dtos::UpdateResolutionDto,
            ApiResponse<Vec<resolutions_dtos::ResolutionResponseDto>>,
            ApiResponse<resolutions_dtos::ResolutionResponseDto>,
            // Assignments
            assignments_dtos::AssignmentResponseDto,
            assignments_dtos::CreateAssignmentDto,
            ApiResponse<Vec<assignments_dtos::AssignmentResponseDto>>,
            ApiResponse<assignments_dtos::AssignmentResponseDto>,
            // Notifications
            notifications_dtos::NotificationResponseDto,
            notifications_dtos::CreateNotificationDto,
            notifications_dtos::MarkReadDto,
            notifications_dtos::MarkReadResultDto,
            ApiResponse<Vec<notifications_dtos::NotificationResponseDto>>,
            ApiResponse<notifications_dtos::NotificationResponseDto>,
            ApiResponse<notifications_dtos::MarkReadResultDto>,
            // Workflow
            MarkField,
            SkippedEffect,
            ExecutionReport,
            workflow_dtos::SubmitResolutionDto,
            workflow_dtos::WorkflowReportDto,
            ApiResponse<workflow_dtos::WorkflowReportDto>,
        )
    ),
    tags(
        (name = "users", description = "User and staff directory"),
        (name = "categories", description = "Complaint categories (listing is public)"),
        (name = "complaints", description = "Student complaints"),
        (name = "resolutions", description = "Resolution records"),
        (name = "assignments", description = "Staff assignments"),
        (name = "notifications", description = "In-app notifications"),
        (name = "workflow", description = "Role-dispatched complaint resolution workflow"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Complaint Desk API",
        version = "0.1.0",
        description = "API documentation for the university complaint desk",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
