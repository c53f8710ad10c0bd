//! Executes a planned set of effects against a [`WorkflowStore`].
//!
//! Primary effects run in order and decide the fate of the whole action.
//! Independent batches then run concurrently, best-effort: a failure
//! skips the rest of its own batch and lands in the report, nothing more.

use futures::future::join_all;
use serde::Serialize;
use utoipa::ToSchema;

use crate::core::error::Result;
use crate::features::workflow::effects::{Batch, Effect, Plan};
use crate::features::workflow::store::WorkflowStore;

/// One fan-out item that did not go through
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkippedEffect {
    pub effect: String,
    pub reason: String,
}

/// Explicit partial-failure report handed back to the caller
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ExecutionReport {
    pub applied: Vec<String>,
    pub skipped: Vec<SkippedEffect>,
}

impl ExecutionReport {
    pub fn fully_applied(&self) -> bool {
        self.skipped.is_empty()
    }
}

async fn apply(store: &dyn WorkflowStore, effect: &Effect) -> Result<()> {
    match effect {
        Effect::CreateResolution(data) => {
            store.create_resolution(data.clone()).await?;
        }
        Effect::UpdateResolution { id, patch } => {
            store.update_resolution(*id, patch.clone()).await?;
        }
        Effect::CreateAssignment(data) => {
            store.create_assignment(data.clone()).await?;
        }
        Effect::UpdateStatus {
            complaint_id,
            status,
        } => {
            store.update_status(*complaint_id, *status).await?;
        }
        Effect::Notify(data) => {
            store.create_notification(data.clone()).await?;
        }
    }
    Ok(())
}

async fn run_batch(store: &dyn WorkflowStore, batch: &Batch) -> ExecutionReport {
    let mut report = ExecutionReport::default();
    let mut effects = batch.0.iter();

    for effect in effects.by_ref() {
        match apply(store, effect).await {
            Ok(()) => report.applied.push(effect.describe()),
            Err(e) => {
                tracing::warn!("Fan-out effect failed, skipping batch: {}: {}", effect.describe(), e);
                report.skipped.push(SkippedEffect {
                    effect: effect.describe(),
                    reason: e.to_string(),
                });
                break;
            }
        }
    }
    // Whatever the failure cut off is reported, not silently dropped
    for effect in effects {
        report.skipped.push(SkippedEffect {
            effect: effect.describe(),
            reason: "skipped after earlier failure in this batch".to_string(),
        });
    }
    report
}

/// Run the plan. Returns Err only when a non-notification primary effect
/// fails; fan-out trouble is reported, never fatal.
pub async fn execute(store: &dyn WorkflowStore, plan: &Plan) -> Result<ExecutionReport> {
    let mut report = ExecutionReport::default();

    for effect in &plan.primary {
        match apply(store, effect).await {
            Ok(()) => report.applied.push(effect.describe()),
            Err(e) if matches!(effect, Effect::Notify(_)) => {
                tracing::warn!("Primary notification failed: {}: {}", effect.describe(), e);
                report.skipped.push(SkippedEffect {
                    effect: effect.describe(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                tracing::error!("Primary effect failed: {}: {}", effect.describe(), e);
                return Err(e);
            }
        }
    }

    let batch_reports = join_all(plan.independent.iter().map(|b| run_batch(store, b))).await;
    for mut batch_report in batch_reports {
        report.applied.append(&mut batch_report.applied);
        report.skipped.append(&mut batch_report.skipped);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::assignments::models::NewAssignment;
    use crate::features::complaints::models::ComplaintStatus;
    use crate::features::notifications::models::NewNotification;
    use crate::features::resolutions::models::NewResolution;
    use crate::features::workflow::store::testing::{RecordedWrite, RecordingStore};

    fn assignment_batch(staff_id: i64) -> Batch {
        Batch(vec![
            Effect::CreateAssignment(NewAssignment {
                complaint_id: 42,
                assigned_to: staff_id,
                assigned_by: 1,
            }),
            Effect::UpdateStatus {
                complaint_id: 42,
                status: ComplaintStatus::InProgress,
            },
            Effect::Notify(NewNotification {
                recipient_id: staff_id,
                complaint_id: Some(42),
                message: "look".to_string(),
            }),
        ])
    }

    fn new_resolution() -> NewResolution {
        NewResolution {
            complaint_id: 42,
            resolved_by: 1,
            attendance_mark: Some(8.0),
            assignment_mark: Some(15.0),
            ca_mark: Some(25.0),
            final_mark: Some(60.0),
            comments: "reviewed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_all_batches_apply() {
        let store = RecordingStore::default();
        let plan = Plan {
            primary: vec![Effect::CreateResolution(new_resolution())],
            independent: vec![assignment_batch(7), assignment_batch(9), assignment_batch(11)],
        };

        let report = execute(&store, &plan).await.unwrap();

        assert!(report.fully_applied());
        assert_eq!(store.count(|w| matches!(w, RecordedWrite::Assignment(_))), 3);
        assert_eq!(store.count(|w| matches!(w, RecordedWrite::Status(..))), 3);
        assert_eq!(
            store.count(|w| matches!(w, RecordedWrite::Notification(_))),
            3
        );
        assert_eq!(store.count(|w| matches!(w, RecordedWrite::Resolution(_))), 1);
    }

    #[tokio::test]
    async fn test_one_failing_batch_does_not_block_siblings() {
        let store = RecordingStore {
            fail_assignments_for: vec![9],
            ..Default::default()
        };
        let plan = Plan {
            primary: vec![],
            independent: vec![assignment_batch(7), assignment_batch(9), assignment_batch(11)],
        };

        let report = execute(&store, &plan).await.unwrap();

        // Staff 7 and 11 still got their full batches
        assert_eq!(store.count(|w| matches!(w, RecordedWrite::Assignment(_))), 2);
        assert_eq!(
            store.count(|w| matches!(w, RecordedWrite::Notification(_))),
            2
        );
        // Failed assignment plus its cut-off status and notify
        assert_eq!(report.skipped.len(), 3);
        assert!(report.skipped[0].effect.contains("staff 9"));
    }

    #[tokio::test]
    async fn test_primary_failure_aborts_the_action() {
        let store = RecordingStore {
            fail_resolution_writes: true,
            ..Default::default()
        };
        let plan = Plan {
            primary: vec![Effect::CreateResolution(new_resolution())],
            independent: vec![assignment_batch(7)],
        };

        assert!(execute(&store, &plan).await.is_err());
        // Fan-out never started
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_failed_notification_in_primary_is_reported_not_fatal() {
        let store = RecordingStore {
            fail_notifications_for: vec![5],
            ..Default::default()
        };
        let plan = Plan {
            primary: vec![
                Effect::UpdateStatus {
                    complaint_id: 42,
                    status: ComplaintStatus::Resolved,
                },
                Effect::Notify(NewNotification {
                    recipient_id: 5,
                    complaint_id: Some(42),
                    message: "resolved".to_string(),
                }),
            ],
            independent: vec![],
        };

        let report = execute(&store, &plan).await.unwrap();
        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(store.count(|w| matches!(w, RecordedWrite::Status(..))), 1);
    }
}
