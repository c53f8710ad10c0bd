use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a staff assignment. One row per staff member the
/// complaint has been routed to; the same complaint can carry several.
#[derive(Debug, Clone, FromRow)]
pub struct Assignment {
    pub id: i64,
    pub complaint_id: i64,
    pub assigned_to: i64,
    pub assigned_by: i64,
    pub reminder_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new assignment
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub complaint_id: i64,
    pub assigned_to: i64,
    pub assigned_by: i64,
}
