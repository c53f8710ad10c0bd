use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::assignments::models::Assignment;

/// Response DTO for assignment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponseDto {
    pub id: i64,
    pub complaint_id: i64,
    pub assigned_to: i64,
    pub assigned_by: i64,
    pub reminder_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Assignment> for AssignmentResponseDto {
    fn from(a: Assignment) -> Self {
        Self {
            id: a.id,
            complaint_id: a.complaint_id,
            assigned_to: a.assigned_to,
            assigned_by: a.assigned_by,
            reminder_count: a.reminder_count,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Request DTO for a manual assignment (outside the workflow fan-out)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAssignmentDto {
    #[validate(range(min = 1, message = "complaint_id must be positive"))]
    pub complaint_id: i64,

    #[validate(range(min = 1, message = "assigned_to must be positive"))]
    pub assigned_to: i64,
}
