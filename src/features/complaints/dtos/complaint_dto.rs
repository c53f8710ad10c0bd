use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::complaints::models::{Complaint, ComplaintAttachment, ComplaintStatus};

/// Response DTO for complaint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplaintResponseDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub student_id: Option<i64>,
    pub course: String,
    pub semester: String,
    pub status: ComplaintStatus,
    pub deadline: DateTime<Utc>,
    pub attachments: Vec<AttachmentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachmentDto {
    pub id: i64,
    pub file_name: String,
    pub file_type: Option<String>,
    pub file_url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<ComplaintAttachment> for AttachmentDto {
    fn from(a: ComplaintAttachment) -> Self {
        Self {
            id: a.id,
            file_name: a.file_name,
            file_type: a.file_type,
            file_url: a.file_url,
            uploaded_at: a.uploaded_at,
        }
    }
}

impl ComplaintResponseDto {
    pub fn from_parts(c: Complaint, attachments: Vec<ComplaintAttachment>) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            category_id: c.category_id,
            student_id: c.student_id,
            course: c.course,
            semester: c.semester,
            status: c.status,
            deadline: c.deadline,
            attachments: attachments.into_iter().map(AttachmentDto::from).collect(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request DTO for creating a complaint (submitted by a student)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintDto {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub category_id: i64,
    #[validate(regex(
        path = "*crate::shared::validation::COURSE_CODE_REGEX",
        message = "course must be a course code like CSC301"
    ))]
    pub course: String,
    #[validate(regex(
        path = "*crate::shared::validation::SEMESTER_REGEX",
        message = "semester must look like 'Fall 2025'"
    ))]
    pub semester: String,
}

/// Request DTO for the administrative complaint patch.
/// Only status, category and deadline are mutable after creation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateComplaintDto {
    pub status: Option<ComplaintStatus>,
    pub category_id: Option<i64>,
    pub deadline: Option<DateTime<Utc>>,
}
