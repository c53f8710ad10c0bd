use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Complaint status enum matching database enum.
///
/// The workflow engine only ever sets `InProgress` and `Resolved`;
/// `Escalated` is produced by an external deadline process and is
/// accepted as an input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "complaint_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Escalated,
    Resolved,
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatus::Open => write!(f, "Open"),
            ComplaintStatus::InProgress => write!(f, "In Progress"),
            ComplaintStatus::Escalated => write!(f, "Escalated"),
            ComplaintStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// Database model for complaint
#[derive(Debug, Clone, FromRow)]
pub struct Complaint {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub student_id: Option<i64>,
    pub course: String,
    pub semester: String,
    pub status: ComplaintStatus,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for a file attached to a complaint
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintAttachment {
    pub id: i64,
    pub complaint_id: i64,
    pub file_name: String,
    pub file_type: Option<String>,
    pub file_url: String,
    pub uploaded_at: DateTime<Utc>,
}
