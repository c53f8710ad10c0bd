use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::resolutions::models::{Resolution, ResolutionPatch};

/// Response DTO for resolution
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolutionResponseDto {
    pub id: i64,
    pub complaint_id: i64,
    pub resolved_by: i64,
    pub attendance_mark: Option<f64>,
    pub assignment_mark: Option<f64>,
    pub ca_mark: Option<f64>,
    pub final_mark: Option<f64>,
    pub comments: String,
    pub is_reviewed: bool,
    pub reviewed_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resolution> for ResolutionResponseDto {
    fn from(r: Resolution) -> Self {
        Self {
            id: r.id,
            complaint_id: r.complaint_id,
            resolved_by: r.resolved_by,
            attendance_mark: r.attendance_mark,
            assignment_mark: r.assignment_mark,
            ca_mark: r.ca_mark,
            final_mark: r.final_mark,
            comments: r.comments,
            is_reviewed: r.is_reviewed,
            reviewed_by: r.reviewed_by,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Request DTO for creating a resolution directly, outside the
/// role-dispatched workflow. Marks here are already numeric; the
/// text-input parsing lives in the workflow form.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateResolutionDto {
    #[validate(range(min = 1, message = "complaint_id must be positive"))]
    pub complaint_id: i64,

    #[validate(range(min = 0.0, max = 10.0, message = "attendance_mark must be 0-10"))]
    pub attendance_mark: Option<f64>,
    #[validate(range(min = 0.0, max = 20.0, message = "assignment_mark must be 0-20"))]
    pub assignment_mark: Option<f64>,
    #[validate(range(min = 0.0, max = 30.0, message = "ca_mark must be 0-30"))]
    pub ca_mark: Option<f64>,
    #[validate(range(min = 0.0, max = 70.0, message = "final_mark must be 0-70"))]
    pub final_mark: Option<f64>,

    #[validate(length(min = 1, message = "comments must not be empty"))]
    pub comments: String,
}

/// Request DTO for the direct resolution patch. Marks and comments only;
/// the reviewed flag flips exclusively through the registrar workflow.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateResolutionDto {
    pub attendance_mark: Option<f64>,
    pub assignment_mark: Option<f64>,
    pub ca_mark: Option<f64>,
    pub final_mark: Option<f64>,
    pub comments: Option<String>,
}

impl From<UpdateResolutionDto> for ResolutionPatch {
    fn from(d: UpdateResolutionDto) -> Self {
        ResolutionPatch {
            attendance_mark: d.attendance_mark,
            assignment_mark: d.assignment_mark,
            ca_mark: d.ca_mark,
            final_mark: d.final_mark,
            comments: d.comments,
            ..Default::default()
        }
    }
}
