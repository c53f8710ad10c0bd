use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for resolution. At most one exists per complaint; the
/// workflow creates it lazily on the first submission and updates it on
/// every later one.
#[derive(Debug, Clone, FromRow)]
pub struct Resolution {
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

/// Insert payload for a new resolution
#[derive(Debug, Clone, PartialEq)]
pub struct NewResolution {
    pub complaint_id: i64,
    pub resolved_by: i64,
    pub attendance_mark: Option<f64>,
    pub assignment_mark: Option<f64>,
    pub ca_mark: Option<f64>,
    pub final_mark: Option<f64>,
    pub comments: String,
}

/// Partial update for an existing resolution. `None` leaves the column
/// untouched, so callers only send the fields they mean to change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionPatch {
    pub resolved_by: Option<i64>,
    pub attendance_mark: Option<f64>,
    pub assignment_mark: Option<f64>,
    pub ca_mark: Option<f64>,
    pub final_mark: Option<f64>,
    pub comments: Option<String>,
    pub is_reviewed: Option<bool>,
    pub reviewed_by: Option<i64>,
}
