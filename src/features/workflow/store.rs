//! Persistence boundary for the executor. The engine plans against plain
//! values; this trait is the only place those values turn into writes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::assignments::models::NewAssignment;
use crate::features::assignments::services::AssignmentService;
use crate::features::complaints::models::ComplaintStatus;
use crate::features::complaints::services::ComplaintService;
use crate::features::notifications::models::NewNotification;
use crate::features::notifications::services::NotificationService;
use crate::features::resolutions::models::{NewResolution, ResolutionPatch};
use crate::features::resolutions::services::ResolutionService;

#[async_trait]
pub trait WorkflowStore: Send + Sync {
    async fn create_resolution(&self, data: NewResolution) -> Result<i64>;
    async fn update_resolution(&self, id: i64, patch: ResolutionPatch) -> Result<()>;
    async fn create_assignment(&self, data: NewAssignment) -> Result<i64>;
    async fn update_status(&self, complaint_id: i64, status: ComplaintStatus) -> Result<()>;
    async fn create_notification(&self, data: NewNotification) -> Result<()>;
}

/// Store backed by the feature services
pub struct PgWorkflowStore {
    resolutions: Arc<ResolutionService>,
    assignments: Arc<AssignmentService>,
    complaints: Arc<ComplaintService>,
    notifications: Arc<NotificationService>,
}

impl PgWorkflowStore {
    pub fn new(
        resolutions: Arc<ResolutionService>,
        assignments: Arc<AssignmentService>,
        complaints: Arc<ComplaintService>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            resolutions,
            assignments,
            complaints,
            notifications,
        }
    }
}

#[async_trait]
impl WorkflowStore for PgWorkflowStore {
    async fn create_resolution(&self, data: NewResolution) -> Result<i64> {
        Ok(self.resolutions.create(data).await?.id)
    }

    async fn update_resolution(&self, id: i64, patch: ResolutionPatch) -> Result<()> {
        self.resolutions.update(id, patch).await?;
        Ok(())
    }

    async fn create_assignment(&self, data: NewAssignment) -> Result<i64> {
        Ok(self.assignments.create(data).await?.id)
    }

    async fn update_status(&self, complaint_id: i64, status: ComplaintStatus) -> Result<()> {
        self.complaints.update_status(complaint_id, status).await?;
        Ok(())
    }

    async fn create_notification(&self, data: NewNotification) -> Result<()> {
        self.notifications.create(data).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;
    use crate::core::error::AppError;

    /// What a store call would have written, flattened for assertions
    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedWrite {
        Resolution(NewResolution),
        ResolutionPatch(i64, ResolutionPatch),
        Assignment(NewAssignment),
        Status(i64, ComplaintStatus),
        Notification(NewNotification),
    }

    /// In-memory store that records every write and can be told to fail
    /// specific operations.
    #[derive(Default)]
    pub struct RecordingStore {
        pub writes: Mutex<Vec<RecordedWrite>>,
        pub fail_assignments_for: Vec<i64>,
        pub fail_notifications_for: Vec<i64>,
        pub fail_resolution_writes: bool,
    }

    impl RecordingStore {
        pub fn writes(&self) -> Vec<RecordedWrite> {
            self.writes.lock().unwrap().clone()
        }

        pub fn count(&self, pred: impl Fn(&RecordedWrite) -> bool) -> usize {
            self.writes().iter().filter(|w| pred(w)).count()
        }

        fn record(&self, write: RecordedWrite) {
            self.writes.lock().unwrap().push(write);
        }
    }

    #[async_trait]
    impl WorkflowStore for RecordingStore {
        async fn create_resolution(&self, data: NewResolution) -> Result<i64> {
            if self.fail_resolution_writes {
                return Err(AppError::Internal("resolution write refused".to_string()));
            }
            self.record(RecordedWrite::Resolution(data));
            Ok(900)
        }

        async fn update_resolution(&self, id: i64, patch: ResolutionPatch) -> Result<()> {
            if self.fail_resolution_writes {
                return Err(AppError::Internal("resolution write refused".to_string()));
            }
            self.record(RecordedWrite::ResolutionPatch(id, patch));
            Ok(())
        }

        async fn create_assignment(&self, data: NewAssignment) -> Result<i64> {
            if self.fail_assignments_for.contains(&data.assigned_to) {
                return Err(AppError::Internal("assignment write refused".to_string()));
            }
            self.record(RecordedWrite::Assignment(data));
            Ok(800)
        }

        async fn update_status(&self, complaint_id: i64, status: ComplaintStatus) -> Result<()> {
            self.record(RecordedWrite::Status(complaint_id, status));
            Ok(())
        }

        async fn create_notification(&self, data: NewNotification) -> Result<()> {
            if self.fail_notifications_for.contains(&data.recipient_id) {
                return Err(AppError::Internal("notification write refused".to_string()));
            }
            self.record(RecordedWrite::Notification(data));
            Ok(())
        }
    }
}
