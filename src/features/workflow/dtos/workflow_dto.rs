use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::complaints::models::ComplaintStatus;
use crate::features::workflow::executor::{ExecutionReport, SkippedEffect};

/// Request DTO for a resolution submission.
///
/// Marks arrive as raw text, exactly as typed: empty strings clear a
/// field, absent fields are untouched, everything else must parse and
/// fall inside the field's range.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SubmitResolutionDto {
    pub comments: String,

    pub attendance_mark: Option<String>,
    pub assignment_mark: Option<String>,
    pub ca_mark: Option<String>,
    pub final_mark: Option<String>,

    /// Additional staff to route the complaint to
    #[serde(default)]
    pub staff_ids: Vec<i64>,

    /// Free-text note sent to each assigned staff member; the comment is
    /// used when omitted
    pub message: Option<String>,
}

impl SubmitResolutionDto {
    pub fn staff_message(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.comments)
    }
}

/// Outcome of a workflow action
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkflowReportDto {
    pub complaint_id: i64,
    pub status: ComplaintStatus,
    pub applied: Vec<String>,
    pub skipped: Vec<SkippedEffect>,
}

impl WorkflowReportDto {
    pub fn new(complaint_id: i64, status: ComplaintStatus, report: ExecutionReport) -> Self {
        Self {
            complaint_id,
            status,
            applied: report.applied,
            skipped: report.skipped,
        }
    }
}
