use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::assignments::models::{Assignment, NewAssignment};

const ASSIGNMENT_COLUMNS: &str = "\
    id, complaint_id, assigned_to, assigned_by, reminder_count, \
    created_at, updated_at";

/// Service for assignment persistence
pub struct AssignmentService {
    pool: PgPool,
}

impl AssignmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an assignment routing a complaint to a staff member
    pub async fn create(&self, data: NewAssignment) -> Result<Assignment> {
        let query = format!(
            "INSERT INTO assignments (complaint_id, assigned_to, assigned_by) \
             VALUES ($1, $2, $3) \
             RETURNING {ASSIGNMENT_COLUMNS}"
        );
        let assignment = sqlx::query_as::<_, Assignment>(&query)
            .bind(data.complaint_id)
            .bind(data.assigned_to)
            .bind(data.assigned_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create assignment: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Assignment created: complaint={}, assigned_to={}, assigned_by={}",
            assignment.complaint_id,
            assignment.assigned_to,
            assignment.assigned_by
        );

        Ok(assignment)
    }

    /// All assignments for a complaint, oldest first
    pub async fn list_by_complaint(&self, complaint_id: i64) -> Result<Vec<Assignment>> {
        let query = format!(
            "SELECT {ASSIGNMENT_COLUMNS} FROM assignments \
             WHERE complaint_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(complaint_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list assignments by complaint: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Assignments routed to a given staff member, newest first
    pub async fn list_by_assignee(&self, assigned_to: i64) -> Result<Vec<Assignment>> {
        let query = format!(
            "SELECT {ASSIGNMENT_COLUMNS} FROM assignments \
             WHERE assigned_to = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(assigned_to)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list assignments by assignee: {:?}", e);
                AppError::Database(e)
            })
    }
}
