use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::complaints::dtos::{
    ComplaintResponseDto, CreateComplaintDto, UpdateComplaintDto,
};
use crate::features::complaints::models::{Complaint, ComplaintAttachment, ComplaintStatus};
use crate::shared::constants::COMPLAINT_DEADLINE_DAYS;
use crate::shared::types::PaginationQuery;

const COMPLAINT_COLUMNS: &str = "\
    id, title, description, category_id, student_id, course, semester, \
    status, deadline, created_at, updated_at";

const ATTACHMENT_COLUMNS: &str =
    "id, complaint_id, file_name, file_type, file_url, uploaded_at";

/// Service for complaint CRUD. Status transitions driven by the resolution
/// workflow go through [`update_status`]; the generic [`update`] is the
/// administrative patch surface.
pub struct ComplaintService {
    pool: PgPool,
}

impl ComplaintService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List complaints with pagination, newest first
    pub async fn list(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ComplaintResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM complaints")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count complaints: {:?}", e);
                AppError::Database(e)
            })?;

        let query = format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints \
             ORDER BY created_at DESC OFFSET $1 LIMIT $2"
        );
        let complaints = sqlx::query_as::<_, Complaint>(&query)
            .bind(pagination.offset())
            .bind(pagination.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list complaints: {:?}", e);
                AppError::Database(e)
            })?;

        let mut items = Vec::with_capacity(complaints.len());
        for complaint in complaints {
            let attachments = self.attachments_for(complaint.id).await?;
            items.push(ComplaintResponseDto::from_parts(complaint, attachments));
        }

        Ok((items, total))
    }

    /// List complaints filed by one student
    pub async fn list_by_student(&self, student_id: i64) -> Result<Vec<ComplaintResponseDto>> {
        let query = format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints \
             WHERE student_id = $1 ORDER BY created_at DESC"
        );
        let complaints = sqlx::query_as::<_, Complaint>(&query)
            .bind(student_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list complaints by student: {:?}", e);
                AppError::Database(e)
            })?;

        let mut items = Vec::with_capacity(complaints.len());
        for complaint in complaints {
            let attachments = self.attachments_for(complaint.id).await?;
            items.push(ComplaintResponseDto::from_parts(complaint, attachments));
        }
        Ok(items)
    }

    /// Get complaint by ID
    pub async fn get_by_id(&self, id: i64) -> Result<ComplaintResponseDto> {
        let complaint = self.find_by_id(id).await?;
        match complaint {
            Some(c) => {
                let attachments = self.attachments_for(c.id).await?;
                Ok(ComplaintResponseDto::from_parts(c, attachments))
            }
            None => Err(AppError::NotFound(format!("Complaint '{}' not found", id))),
        }
    }

    /// Raw model lookup used by the workflow
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Complaint>> {
        let query = format!("SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE id = $1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get complaint by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Create a complaint. The deadline is set to creation time plus three
    /// days; escalation past it belongs to an external clock.
    pub async fn create(
        &self,
        student_id: i64,
        data: CreateComplaintDto,
    ) -> Result<ComplaintResponseDto> {
        let deadline = Utc::now() + Duration::days(COMPLAINT_DEADLINE_DAYS);

        let query = format!(
            "INSERT INTO complaints (title, description, category_id, student_id, course, semester, deadline) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COMPLAINT_COLUMNS}"
        );
        let complaint = sqlx::query_as::<_, Complaint>(&query)
            .bind(&data.title)
            .bind(&data.description)
            .bind(data.category_id)
            .bind(student_id)
            .bind(&data.course)
            .bind(&data.semester)
            .bind(deadline)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create complaint: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Complaint created: id={}, student={}, title={}",
            complaint.id,
            student_id,
            complaint.title
        );

        Ok(ComplaintResponseDto::from_parts(complaint, Vec::new()))
    }

    /// Administrative patch: status, category and deadline only
    pub async fn update(&self, id: i64, data: UpdateComplaintDto) -> Result<ComplaintResponseDto> {
        let query = format!(
            "UPDATE complaints SET \
                status = COALESCE($2, status), \
                category_id = COALESCE($3, category_id), \
                deadline = COALESCE($4, deadline), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COMPLAINT_COLUMNS}"
        );
        let complaint = sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(data.status)
            .bind(data.category_id)
            .bind(data.deadline)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update complaint: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Complaint '{}' not found", id)))?;

        let attachments = self.attachments_for(complaint.id).await?;
        Ok(ComplaintResponseDto::from_parts(complaint, attachments))
    }

    /// Status transition issued by the workflow engine
    pub async fn update_status(&self, id: i64, status: ComplaintStatus) -> Result<Complaint> {
        let query = format!(
            "UPDATE complaints SET status = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {COMPLAINT_COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update complaint status: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Complaint '{}' not found", id)))
    }

    /// Administrative escape hatch; not part of any workflow
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete complaint: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Complaint '{}' not found", id)));
        }

        tracing::info!("Complaint deleted: id={}", id);
        Ok(())
    }

    async fn attachments_for(&self, complaint_id: i64) -> Result<Vec<ComplaintAttachment>> {
        let query = format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM complaint_attachments \
             WHERE complaint_id = $1 ORDER BY uploaded_at"
        );
        sqlx::query_as::<_, ComplaintAttachment>(&query)
            .bind(complaint_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load attachments: {:?}", e);
                AppError::Database(e)
            })
    }
}
