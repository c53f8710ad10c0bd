//! Side effects the engine plans without performing. Planning is pure;
//! the executor turns effects into writes and reports what happened.

use crate::features::assignments::models::NewAssignment;
use crate::features::complaints::models::ComplaintStatus;
use crate::features::notifications::models::NewNotification;
use crate::features::resolutions::models::{NewResolution, ResolutionPatch};

/// One write the workflow wants performed
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreateResolution(NewResolution),
    UpdateResolution { id: i64, patch: ResolutionPatch },
    CreateAssignment(NewAssignment),
    UpdateStatus {
        complaint_id: i64,
        status: ComplaintStatus,
    },
    Notify(NewNotification),
}

impl Effect {
    /// Short label used in logs and the execution report
    pub fn describe(&self) -> String {
        match self {
            Effect::CreateResolution(r) => {
                format!("create resolution for complaint {}", r.complaint_id)
            }
            Effect::UpdateResolution { id, .. } => format!("update resolution {id}"),
            Effect::CreateAssignment(a) => format!(
                "assign complaint {} to staff {}",
                a.complaint_id, a.assigned_to
            ),
            Effect::UpdateStatus {
                complaint_id,
                status,
            } => format!("set complaint {complaint_id} status to {status}"),
            Effect::Notify(n) => format!("notify user {}", n.recipient_id),
        }
    }
}

/// A group of effects that belong to one logical fan-out item (for
/// example: one staff assignment plus its status bump and notification).
/// A failure inside a batch skips the rest of that batch only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch(pub Vec<Effect>);

/// Output of the planning step.
///
/// `primary` runs in order and decides overall success; `independent`
/// batches run concurrently afterwards, best-effort, and only show up in
/// the partial-failure report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub primary: Vec<Effect>,
    pub independent: Vec<Batch>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.independent.iter().all(|b| b.0.is_empty())
    }
}
