//! The planning half of the resolution workflow: pure functions from
//! (state, form, selections) to a [`Plan`] of effects. Nothing here
//! touches the database.

use thiserror::Error;

use crate::core::error::AppError;
use crate::features::assignments::models::NewAssignment;
use crate::features::complaints::models::ComplaintStatus;
use crate::features::notifications::models::NewNotification;
use crate::features::resolutions::models::{NewResolution, ResolutionPatch};
use crate::features::workflow::effects::{Batch, Effect, Plan};
use crate::features::workflow::form::ResolutionForm;
use crate::features::workflow::messages;
use crate::features::workflow::policy::MarkField;
use crate::features::workflow::state::WorkflowState;

#[derive(Debug, Error, PartialEq)]
pub enum WorkflowError {
    #[error("A comment is required")]
    EmptyComment,

    #[error("Complaint {0} is already resolved")]
    AlreadyResolved(i64),

    #[error("Complaint {0} has no resolution to review")]
    MissingResolution(i64),

    #[error("Staff member {0} is at the Registrar's Office and cannot be assigned until all required marks are filled")]
    RegistrarNotSelectable(i64),
}

impl From<WorkflowError> for AppError {
    fn from(e: WorkflowError) -> Self {
        match e {
            WorkflowError::EmptyComment | WorkflowError::RegistrarNotSelectable(_) => {
                AppError::Validation(e.to_string())
            }
            WorkflowError::AlreadyResolved(_) | WorkflowError::MissingResolution(_) => {
                AppError::Conflict(e.to_string())
            }
        }
    }
}

/// Recipient sets the fan-out needs beyond the complaint itself
#[derive(Debug, Clone, Default)]
pub struct FanoutContext {
    /// Every staff member, notified when the registrar resolves
    pub all_staff: Vec<i64>,
    /// Users with the admin role, notified on resolution activity
    pub admin_ids: Vec<i64>,
    /// Display name of the acting user, embedded in activity messages
    pub actor_display: String,
}

fn notify(recipient_id: i64, complaint_id: i64, message: String) -> Effect {
    Effect::Notify(NewNotification {
        recipient_id,
        complaint_id: Some(complaint_id),
        message,
    })
}

fn resolution_effect(state: &WorkflowState, form: &ResolutionForm) -> Effect {
    match state.existing_resolution_id {
        Some(id) => Effect::UpdateResolution {
            id,
            patch: ResolutionPatch {
                resolved_by: Some(state.actor_id),
                attendance_mark: form.mark(MarkField::Attendance),
                assignment_mark: form.mark(MarkField::Assignment),
                ca_mark: form.mark(MarkField::Ca),
                final_mark: form.mark(MarkField::Final),
                comments: Some(form.comments.clone()),
                ..Default::default()
            },
        },
        None => Effect::CreateResolution(NewResolution {
            complaint_id: state.complaint_id,
            resolved_by: state.actor_id,
            attendance_mark: form.mark(MarkField::Attendance),
            assignment_mark: form.mark(MarkField::Assignment),
            ca_mark: form.mark(MarkField::Ca),
            final_mark: form.mark(MarkField::Final),
            comments: form.comments.clone(),
        }),
    }
}

/// Lecturer / generic-admin / coordinator submission.
///
/// Writes the resolution only when the category-required marks are all
/// present; staff assignments are planned regardless, one independent
/// batch per selected id so a failed one never blocks its siblings.
pub fn plan_submit(
    state: &WorkflowState,
    form: &ResolutionForm,
    selected_staff: &[i64],
    staff_message: &str,
    ctx: &FanoutContext,
) -> Result<Plan, WorkflowError> {
    if form.comments.trim().is_empty() {
        return Err(WorkflowError::EmptyComment);
    }
    if state.is_resolved() {
        return Err(WorkflowError::AlreadyResolved(state.complaint_id));
    }

    let mut plan = Plan::default();

    if state.form_filled {
        plan.primary.push(resolution_effect(state, form));

        let updated = state.existing_resolution_id.is_some();
        if !updated {
            plan.independent.push(Batch(vec![notify(
                state.actor_id,
                state.complaint_id,
                messages::resolver_self(),
            )]));
        }
        if selected_staff.is_empty() {
            if let Some(student_id) = state.student_id {
                plan.independent.push(Batch(vec![notify(
                    student_id,
                    state.complaint_id,
                    messages::student_awaiting_approval(state.complaint_id),
                )]));
            }
        }
        for admin_id in &ctx.admin_ids {
            plan.independent.push(Batch(vec![notify(
                *admin_id,
                state.complaint_id,
                messages::admin_resolution_activity(
                    &ctx.actor_display,
                    state.complaint_id,
                    updated,
                ),
            )]));
        }
    }

    for staff_id in selected_staff {
        plan.independent.push(Batch(vec![
            Effect::CreateAssignment(NewAssignment {
                complaint_id: state.complaint_id,
                assigned_to: *staff_id,
                assigned_by: state.actor_id,
            }),
            Effect::UpdateStatus {
                complaint_id: state.complaint_id,
                status: ComplaintStatus::InProgress,
            },
            notify(*staff_id, state.complaint_id, staff_message.to_string()),
        ]));
    }

    // Assigning staff escalates the handling level; the student hears
    // about that instead of the registrar-approval message.
    if !selected_staff.is_empty() {
        if let Some(student_id) = state.student_id {
            plan.independent.push(Batch(vec![notify(
                student_id,
                state.complaint_id,
                messages::student_faculty_level(state.complaint_id),
            )]));
        }
    }

    Ok(plan)
}

/// Finance-office submission: comment-only resolution, selected staff are
/// notified, status never changes.
pub fn plan_finance_submit(
    state: &WorkflowState,
    form: &ResolutionForm,
    selected_staff: &[i64],
    staff_message: &str,
) -> Result<Plan, WorkflowError> {
    if form.comments.trim().is_empty() {
        return Err(WorkflowError::EmptyComment);
    }
    if state.is_resolved() {
        return Err(WorkflowError::AlreadyResolved(state.complaint_id));
    }

    let comment_form = ResolutionForm::new(form.comments.clone());
    let mut plan = Plan {
        primary: vec![resolution_effect(state, &comment_form)],
        independent: Vec::new(),
    };

    for staff_id in selected_staff {
        plan.independent.push(Batch(vec![notify(
            *staff_id,
            state.complaint_id,
            staff_message.to_string(),
        )]));
    }

    Ok(plan)
}

/// Registrar approval of a submitted resolution: flips the reviewed flag,
/// resolves the complaint, fans out to all staff and the student.
pub fn plan_registrar_review(
    state: &WorkflowState,
    ctx: &FanoutContext,
) -> Result<Plan, WorkflowError> {
    if state.is_resolved() {
        return Err(WorkflowError::AlreadyResolved(state.complaint_id));
    }
    let resolution_id = state
        .existing_resolution_id
        .ok_or(WorkflowError::MissingResolution(state.complaint_id))?;

    let mut plan = Plan {
        primary: vec![
            Effect::UpdateResolution {
                id: resolution_id,
                patch: ResolutionPatch {
                    is_reviewed: Some(true),
                    reviewed_by: Some(state.actor_id),
                    ..Default::default()
                },
            },
            Effect::UpdateStatus {
                complaint_id: state.complaint_id,
                status: ComplaintStatus::Resolved,
            },
        ],
        independent: Vec::new(),
    };

    push_resolved_fanout(&mut plan, state, ctx);
    Ok(plan)
}

/// The blunt registrar path used by the admin form: resolve the complaint
/// outright, resolution object or not. Distinct from the review path on
/// purpose; the two have different preconditions.
pub fn plan_registrar_mark_resolved(
    state: &WorkflowState,
    ctx: &FanoutContext,
) -> Result<Plan, WorkflowError> {
    if state.is_resolved() {
        return Err(WorkflowError::AlreadyResolved(state.complaint_id));
    }

    let mut plan = Plan {
        primary: vec![Effect::UpdateStatus {
            complaint_id: state.complaint_id,
            status: ComplaintStatus::Resolved,
        }],
        independent: Vec::new(),
    };

    push_resolved_fanout(&mut plan, state, ctx);
    Ok(plan)
}

fn push_resolved_fanout(plan: &mut Plan, state: &WorkflowState, ctx: &FanoutContext) {
    for staff_id in &ctx.all_staff {
        plan.independent.push(Batch(vec![notify(
            *staff_id,
            state.complaint_id,
            messages::staff_registrar_resolved(state.complaint_id),
        )]));
    }
    if let Some(student_id) = state.student_id {
        plan.independent.push(Batch(vec![notify(
            student_id,
            state.complaint_id,
            messages::student_registrar_resolved(),
        )]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::workflow::state::ActorRole;

    fn lecturer_state(
        category: &str,
        form: &ResolutionForm,
        existing_resolution_id: Option<i64>,
    ) -> WorkflowState {
        WorkflowState::derive(
            42,
            ComplaintStatus::Open,
            Some(5),
            1,
            ActorRole::Lecturer,
            category,
            form,
            existing_resolution_id,
        )
    }

    fn filled_form() -> ResolutionForm {
        let mut form = ResolutionForm::new("reviewed");
        form.set_mark(MarkField::Attendance, "8").unwrap();
        form.set_mark(MarkField::Assignment, "15").unwrap();
        form.set_mark(MarkField::Final, "60").unwrap();
        form.set_mark(MarkField::Ca, "25").unwrap();
        form
    }

    fn count_effects(plan: &Plan, pred: impl Fn(&Effect) -> bool) -> usize {
        plan.primary
            .iter()
            .chain(plan.independent.iter().flat_map(|b| b.0.iter()))
            .filter(|e| pred(e))
            .count()
    }

    #[test]
    fn test_empty_comment_rejected_before_planning() {
        let form = ResolutionForm::new("   ");
        let state = lecturer_state("Missing Grade", &form, None);
        assert_eq!(
            plan_submit(&state, &form, &[7], "look", &FanoutContext::default()),
            Err(WorkflowError::EmptyComment)
        );
    }

    #[test]
    fn test_submit_creates_when_no_resolution_exists() {
        let form = filled_form();
        let state = lecturer_state("Missing Grade", &form, None);
        let plan = plan_submit(&state, &form, &[], "", &FanoutContext::default()).unwrap();

        assert_eq!(plan.primary.len(), 1);
        match &plan.primary[0] {
            Effect::CreateResolution(r) => {
                assert_eq!(r.complaint_id, 42);
                assert_eq!(r.attendance_mark, Some(8.0));
                assert_eq!(r.final_mark, Some(60.0));
                assert_eq!(r.comments, "reviewed");
            }
            other => panic!("expected create, got {other:?}"),
        }
        // First submission earns the resolver a note of their own
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if n.recipient_id == 1 && n.message == "Good job!!"
            )),
            1
        );
        // No staff selected, so the student hears it went to the registrar
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if n.recipient_id == 5
                    && n.message.contains("awaiting approval")
            )),
            1
        );
    }

    #[test]
    fn test_submit_updates_when_resolution_exists() {
        let form = filled_form();
        let state = lecturer_state("Missing Grade", &form, Some(301));
        let plan = plan_submit(&state, &form, &[], "", &FanoutContext::default()).unwrap();

        assert_eq!(plan.primary.len(), 1);
        match &plan.primary[0] {
            Effect::UpdateResolution { id, patch } => {
                assert_eq!(*id, 301);
                assert_eq!(patch.resolved_by, Some(1));
                assert_eq!(patch.is_reviewed, None);
            }
            other => panic!("expected update, got {other:?}"),
        }
        // Re-submissions do not repeat the first-time self-notification
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if n.recipient_id == 1
            )),
            0
        );
    }

    #[test]
    fn test_unfilled_form_skips_resolution_but_still_assigns() {
        let mut form = ResolutionForm::new("partial");
        form.set_mark(MarkField::Attendance, "8").unwrap();
        let state = lecturer_state("Missing Grade", &form, None);
        let plan = plan_submit(&state, &form, &[7, 9], "look", &FanoutContext::default()).unwrap();

        assert!(plan.primary.is_empty());
        assert_eq!(
            count_effects(&plan, |e| matches!(e, Effect::CreateAssignment(_))),
            2
        );
    }

    #[test]
    fn test_unfilled_form_without_staff_plans_nothing() {
        let mut form = ResolutionForm::new("partial");
        form.set_mark(MarkField::Attendance, "8").unwrap();
        let state = lecturer_state("Missing Grade", &form, None);

        let ctx = FanoutContext {
            admin_ids: vec![20],
            actor_display: "Dr. Okafor".to_string(),
            ..Default::default()
        };
        let plan = plan_submit(&state, &form, &[], "", &ctx).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_three_staff_fan_out_counts() {
        let form = filled_form();
        let state = lecturer_state("Missing Grade", &form, None);
        let plan =
            plan_submit(&state, &form, &[7, 9, 11], "look", &FanoutContext::default()).unwrap();

        assert_eq!(
            count_effects(&plan, |e| matches!(e, Effect::CreateAssignment(_))),
            3
        );
        // One status bump per assignment, not one overall
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::UpdateStatus {
                    status: ComplaintStatus::InProgress,
                    ..
                }
            )),
            3
        );
        let staff_notifies = count_effects(&plan, |e| {
            matches!(e, Effect::Notify(n) if [7, 9, 11].contains(&n.recipient_id))
        });
        assert_eq!(staff_notifies, 3);
    }

    #[test]
    fn test_end_to_end_missing_grade_submission() {
        // Complaint 42, category "Missing Grade", marks 8/15/60/25,
        // comment "reviewed", staff [7, 9].
        let form = filled_form();
        let state = lecturer_state("Missing Grade", &form, None);
        let plan = plan_submit(&state, &form, &[7, 9], "please verify", &FanoutContext::default())
            .unwrap();

        assert_eq!(
            count_effects(&plan, |e| matches!(e, Effect::CreateResolution(_))),
            1
        );
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::CreateAssignment(a) if a.complaint_id == 42 && [7, 9].contains(&a.assigned_to)
            )),
            2
        );
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if [7, 9].contains(&n.recipient_id) && n.message == "please verify"
            )),
            2
        );
        // With staff assigned, student 5 gets exactly one message: the
        // faculty-level escalation, not the registrar-approval one.
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if n.recipient_id == 5
            )),
            1
        );
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if n.recipient_id == 5
                    && n.message.contains("Faculty Level")
            )),
            1
        );
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::UpdateStatus {
                    status: ComplaintStatus::InProgress,
                    ..
                }
            )),
            2
        );
    }

    #[test]
    fn test_admin_activity_notify_only_on_resolution_write() {
        let ctx = FanoutContext {
            admin_ids: vec![20, 21],
            actor_display: "Dr. Okafor".to_string(),
            ..Default::default()
        };

        let form = filled_form();
        let state = lecturer_state("Missing Grade", &form, None);
        let plan = plan_submit(&state, &form, &[], "", &ctx).unwrap();
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if [20, 21].contains(&n.recipient_id)
            )),
            2
        );

        let unfilled = ResolutionForm::new("partial");
        let state = lecturer_state("Missing Grade", &unfilled, None);
        let plan = plan_submit(&state, &unfilled, &[7], "look", &ctx).unwrap();
        assert_eq!(
            count_effects(&plan, |e| matches!(
                e,
                Effect::Notify(n) if [20, 21].contains(&n.recipient_id)
            )),
            0
        );
    }

    #[test]
    fn test_finance_submit_keeps_status_and_drops_marks() {
        let form = filled_form();
        let mut state = lecturer_state("Missing Grade", &form, None);
        state.actor_role = ActorRole::Finance;

        let plan = plan_finance_submit(&state, &form, &[7], "fee waived").unwrap();

        match &plan.primary[0] {
            Effect::CreateResolution(r) => {
                assert_eq!(r.comments, "reviewed");
                assert_eq!(r.attendance_mark, None);
                assert_eq!(r.final_mark, None);
            }
            other => panic!("expected create, got {other:?}"),
        }
        assert_eq!(count_effects(&plan, |e| matches!(e, Effect::UpdateStatus { .. })), 0);
        assert_eq!(
            count_effects(&plan, |e| matches!(e, Effect::Notify(n) if n.recipient_id == 7)),
            1
        );
    }

    #[test]
    fn test_registrar_review_requires_resolution() {
        let form = ResolutionForm::new("ok");
        let state = lecturer_state("Missing Grade", &form, None);
        assert_eq!(
            plan_registrar_review(&state, &FanoutContext::default()),
            Err(WorkflowError::MissingResolution(42))
        );
    }

    #[test]
    fn test_registrar_review_resolves_and_fans_out() {
        let ctx = FanoutContext {
            all_staff: vec![7, 9, 11],
            ..Default::default()
        };
        let form = ResolutionForm::new("ok");
        let mut state = lecturer_state("Missing Grade", &form, Some(301));
        state.actor_id = 30;
        state.actor_role = ActorRole::Registrar;

        let plan = plan_registrar_review(&state, &ctx).unwrap();

        match &plan.primary[0] {
            Effect::UpdateResolution { id, patch } => {
                assert_eq!(*id, 301);
                assert_eq!(patch.is_reviewed, Some(true));
                assert_eq!(patch.reviewed_by, Some(30));
            }
            other => panic!("expected review update, got {other:?}"),
        }
        assert!(matches!(
            plan.primary[1],
            Effect::UpdateStatus {
                status: ComplaintStatus::Resolved,
                ..
            }
        ));
        // One per staff member plus the student
        assert_eq!(
            count_effects(&plan, |e| matches!(e, Effect::Notify(_))),
            4
        );
        assert_eq!(
            count_effects(&plan, |e| matches!(e, Effect::Notify(n) if n.recipient_id == 5)),
            1
        );
    }

    #[test]
    fn test_mark_resolved_needs_no_resolution() {
        let ctx = FanoutContext {
            all_staff: vec![7],
            ..Default::default()
        };
        let form = ResolutionForm::new("");
        let mut state = lecturer_state("Missing Grade", &form, None);
        state.actor_id = 30;
        state.actor_role = ActorRole::Registrar;

        let plan = plan_registrar_mark_resolved(&state, &ctx).unwrap();

        assert_eq!(plan.primary.len(), 1);
        assert!(matches!(
            plan.primary[0],
            Effect::UpdateStatus {
                status: ComplaintStatus::Resolved,
                ..
            }
        ));
        // Staff plus the student
        assert_eq!(count_effects(&plan, |e| matches!(e, Effect::Notify(_))), 2);
    }

    #[test]
    fn test_resolved_complaint_accepts_no_further_actions() {
        let form = filled_form();
        let mut state = lecturer_state("Missing Grade", &form, Some(301));
        state.status = ComplaintStatus::Resolved;

        assert_eq!(
            plan_submit(&state, &form, &[], "", &FanoutContext::default()),
            Err(WorkflowError::AlreadyResolved(42))
        );
        assert_eq!(
            plan_registrar_review(&state, &FanoutContext::default()),
            Err(WorkflowError::AlreadyResolved(42))
        );
        assert_eq!(
            plan_registrar_mark_resolved(&state, &FanoutContext::default()),
            Err(WorkflowError::AlreadyResolved(42))
        );
    }

    #[test]
    fn test_escalated_behaves_like_open_for_gating() {
        let form = filled_form();
        let mut state = lecturer_state("Missing Grade", &form, None);
        state.status = ComplaintStatus::Escalated;

        let plan = plan_submit(&state, &form, &[7], "look", &FanoutContext::default()).unwrap();
        assert_eq!(
            count_effects(&plan, |e| matches!(e, Effect::CreateAssignment(_))),
            1
        );
    }
}
