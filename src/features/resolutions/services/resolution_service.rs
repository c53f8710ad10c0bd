use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::resolutions::models::{NewResolution, Resolution, ResolutionPatch};

const RESOLUTION_COLUMNS: &str = "\
    id, complaint_id, resolved_by, attendance_mark, assignment_mark, \
    ca_mark, final_mark, comments, is_reviewed, reviewed_by, \
    created_at, updated_at";

/// Service for resolution persistence
pub struct ResolutionService {
    pool: PgPool,
}

impl ResolutionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all resolutions, newest first
    pub async fn list(&self) -> Result<Vec<Resolution>> {
        let query =
            format!("SELECT {RESOLUTION_COLUMNS} FROM resolutions ORDER BY created_at DESC");
        sqlx::query_as::<_, Resolution>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list resolutions: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Get resolution by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Resolution> {
        let query = format!("SELECT {RESOLUTION_COLUMNS} FROM resolutions WHERE id = $1");
        sqlx::query_as::<_, Resolution>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resolution by ID: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Resolution '{}' not found", id)))
    }

    /// The lazily-created resolution for a complaint, if any.
    /// Uniqueness is enforced by the schema.
    pub async fn find_by_complaint(&self, complaint_id: i64) -> Result<Option<Resolution>> {
        let query = format!("SELECT {RESOLUTION_COLUMNS} FROM resolutions WHERE complaint_id = $1");
        sqlx::query_as::<_, Resolution>(&query)
            .bind(complaint_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find resolution by complaint: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Create the resolution for a complaint. Fails with a conflict if one
    /// already exists; callers decide between create and update up front.
    pub async fn create(&self, data: NewResolution) -> Result<Resolution> {
        let query = format!(
            "INSERT INTO resolutions \
                (complaint_id, resolved_by, attendance_mark, assignment_mark, ca_mark, final_mark, comments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {RESOLUTION_COLUMNS}"
        );
        let resolution = sqlx::query_as::<_, Resolution>(&query)
            .bind(data.complaint_id)
            .bind(data.resolved_by)
            .bind(data.attendance_mark)
            .bind(data.assignment_mark)
            .bind(data.ca_mark)
            .bind(data.final_mark)
            .bind(&data.comments)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                    format!("Complaint '{}' already has a resolution", data.complaint_id),
                ),
                _ => {
                    tracing::error!("Failed to create resolution: {:?}", e);
                    AppError::Database(e)
                }
            })?;

        tracing::info!(
            "Resolution created: id={}, complaint={}, resolved_by={}",
            resolution.id,
            resolution.complaint_id,
            resolution.resolved_by
        );

        Ok(resolution)
    }

    /// Apply a partial update
    pub async fn update(&self, id: i64, patch: ResolutionPatch) -> Result<Resolution> {
        let query = format!(
            "UPDATE resolutions SET \
                resolved_by = COALESCE($2, resolved_by), \
                attendance_mark = COALESCE($3, attendance_mark), \
                assignment_mark = COALESCE($4, assignment_mark), \
                ca_mark = COALESCE($5, ca_mark), \
                final_mark = COALESCE($6, final_mark), \
                comments = COALESCE($7, comments), \
                is_reviewed = COALESCE($8, is_reviewed), \
                reviewed_by = COALESCE($9, reviewed_by), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {RESOLUTION_COLUMNS}"
        );
        let resolution = sqlx::query_as::<_, Resolution>(&query)
            .bind(id)
            .bind(patch.resolved_by)
            .bind(patch.attendance_mark)
            .bind(patch.assignment_mark)
            .bind(patch.ca_mark)
            .bind(patch.final_mark)
            .bind(patch.comments)
            .bind(patch.is_reviewed)
            .bind(patch.reviewed_by)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update resolution: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Resolution '{}' not found", id)))?;

        Ok(resolution)
    }
}
