use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;
use crate::features::complaints::models::Complaint;
use crate::features::complaints::services::ComplaintService;
use crate::features::resolutions::services::ResolutionService;
use crate::features::users::models::{UserRole, UserView};
use crate::features::users::services::UserService;
use crate::features::workflow::dtos::{SubmitResolutionDto, WorkflowReportDto};
use crate::features::workflow::engine::{
    plan_finance_submit, plan_registrar_mark_resolved, plan_registrar_review, plan_submit,
    FanoutContext, WorkflowError,
};
use crate::features::workflow::executor::execute;
use crate::features::workflow::form::ResolutionForm;
use crate::features::workflow::policy::MarkField;
use crate::features::workflow::state::{ActorRole, WorkflowState};
use crate::features::workflow::store::WorkflowStore;
use crate::shared::cache::TtlCache;

/// How long category and user lookups stay cached
const LOOKUP_TTL: Duration = Duration::from_secs(300);

/// Orchestrates one workflow action: loads context, derives the state,
/// plans the effects by actor role, and executes them.
pub struct WorkflowService {
    complaints: Arc<ComplaintService>,
    categories: Arc<CategoryService>,
    resolutions: Arc<ResolutionService>,
    users: Arc<UserService>,
    store: Arc<dyn WorkflowStore>,
    category_cache: TtlCache<i64, Category>,
    user_cache: TtlCache<i64, UserView>,
}

impl WorkflowService {
    pub fn new(
        complaints: Arc<ComplaintService>,
        categories: Arc<CategoryService>,
        resolutions: Arc<ResolutionService>,
        users: Arc<UserService>,
        store: Arc<dyn WorkflowStore>,
    ) -> Self {
        Self {
            complaints,
            categories,
            resolutions,
            users,
            store,
            category_cache: TtlCache::new(LOOKUP_TTL),
            user_cache: TtlCache::new(LOOKUP_TTL),
        }
    }

    /// Dispatch a resolution submission by the actor's workflow role.
    pub async fn submit_resolution(
        &self,
        actor: &AuthenticatedUser,
        complaint_id: i64,
        dto: SubmitResolutionDto,
    ) -> Result<WorkflowReportDto> {
        let complaint = self.load_complaint(complaint_id).await?;
        let form = build_form(&dto)?;

        let actor_view = self.load_user(actor.id).await;
        let actor_role = classify_actor(actor, actor_view.as_ref())?;

        let category_name = self.category_name(complaint.category_id).await;
        let resolution = self.resolutions.find_by_complaint(complaint_id).await?;

        let state = WorkflowState::derive(
            complaint.id,
            complaint.status,
            complaint.student_id,
            actor.id,
            actor_role,
            &category_name,
            &form,
            resolution.map(|r| r.id),
        );

        self.check_assignment_targets(&state, &dto.staff_ids).await?;

        let ctx = self.fanout_context(actor, actor_view.as_ref()).await;
        let plan = match actor_role {
            ActorRole::Registrar => plan_registrar_review(&state, &ctx)?,
            ActorRole::Finance => {
                plan_finance_submit(&state, &form, &dto.staff_ids, dto.staff_message())?
            }
            ActorRole::GenericAdmin | ActorRole::Lecturer | ActorRole::ComplaintCoordinator => {
                plan_submit(&state, &form, &dto.staff_ids, dto.staff_message(), &ctx)?
            }
        };

        let report = execute(self.store.as_ref(), &plan).await?;
        tracing::info!(
            "Workflow action on complaint {}: {} applied, {} skipped",
            complaint_id,
            report.applied.len(),
            report.skipped.len()
        );

        let status = self.current_status(complaint_id, complaint.status).await;
        Ok(WorkflowReportDto::new(complaint_id, status, report))
    }

    /// The registrar's direct mark-as-resolved path. Unlike the review
    /// path it does not require a resolution to exist.
    pub async fn mark_resolved(
        &self,
        actor: &AuthenticatedUser,
        complaint_id: i64,
    ) -> Result<WorkflowReportDto> {
        let actor_view = self.load_user(actor.id).await;
        let actor_role = classify_actor(actor, actor_view.as_ref())?;
        if actor_role != ActorRole::Registrar {
            return Err(AppError::Forbidden(
                "Only the Registrar's Office can mark a complaint resolved".to_string(),
            ));
        }

        let complaint = self.load_complaint(complaint_id).await?;
        let resolution = self.resolutions.find_by_complaint(complaint_id).await?;
        let category_name = self.category_name(complaint.category_id).await;
        let form = ResolutionForm::default();

        let state = WorkflowState::derive(
            complaint.id,
            complaint.status,
            complaint.student_id,
            actor.id,
            actor_role,
            &category_name,
            &form,
            resolution.map(|r| r.id),
        );

        let ctx = self.fanout_context(actor, actor_view.as_ref()).await;
        let plan = plan_registrar_mark_resolved(&state, &ctx)?;

        let report = execute(self.store.as_ref(), &plan).await?;
        let status = self.current_status(complaint_id, complaint.status).await;
        Ok(WorkflowReportDto::new(complaint_id, status, report))
    }

    async fn load_complaint(&self, id: i64) -> Result<Complaint> {
        self.complaints
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Complaint '{}' not found", id)))
    }

    /// Category name through the read-through cache. A failed lookup falls
    /// back to an empty name, which the policy maps to no required fields.
    async fn category_name(&self, category_id: i64) -> String {
        let loaded = self
            .category_cache
            .get_or_try_load(category_id, || async {
                self.categories
                    .find_by_id(category_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Category '{}' not found", category_id))
                    })
            })
            .await;

        match loaded {
            Ok(category) => category.name,
            Err(e) => {
                tracing::warn!("Category lookup failed, requiring no marks: {}", e);
                String::new()
            }
        }
    }

    /// User view through the read-through cache; None when the lookup
    /// fails, leaving callers on "Unknown" defaults.
    async fn load_user(&self, user_id: i64) -> Option<UserView> {
        let loaded = self
            .user_cache
            .get_or_try_load(user_id, || self.users.get_view(user_id))
            .await;

        match loaded {
            Ok(view) => Some(view),
            Err(e) => {
                tracing::warn!("User lookup failed for {}: {}", user_id, e);
                None
            }
        }
    }

    /// Registrar-office staff cannot be assignment targets until the
    /// required marks are filled.
    async fn check_assignment_targets(
        &self,
        state: &WorkflowState,
        staff_ids: &[i64],
    ) -> Result<()> {
        for staff_id in staff_ids {
            let office = self.load_user(*staff_id).await.and_then(|v| v.office);
            if !state.staff_selectable(office.as_deref()) {
                return Err(WorkflowError::RegistrarNotSelectable(*staff_id).into());
            }
        }
        Ok(())
    }

    async fn fanout_context(
        &self,
        actor: &AuthenticatedUser,
        actor_view: Option<&UserView>,
    ) -> FanoutContext {
        let staff = match self.users.list_staff_views().await {
            Ok(staff) => staff,
            Err(e) => {
                tracing::warn!("Staff lookup failed, fan-out will be empty: {}", e);
                Vec::new()
            }
        };

        let all_staff = staff.iter().map(|s| s.id).collect();
        let admin_ids = staff
            .iter()
            .filter(|s| {
                s.id != actor.id
                    && (s.role == UserRole::Admin || s.secondary_role == Some(UserRole::Admin))
            })
            .map(|s| s.id)
            .collect();

        let actor_display = actor_view
            .map(|v| v.full_name.clone())
            .unwrap_or_else(|| actor.username.clone());

        FanoutContext {
            all_staff,
            admin_ids,
            actor_display,
        }
    }

    async fn current_status(
        &self,
        complaint_id: i64,
        fallback: crate::features::complaints::models::ComplaintStatus,
    ) -> crate::features::complaints::models::ComplaintStatus {
        match self.complaints.find_by_id(complaint_id).await {
            Ok(Some(c)) => c.status,
            _ => fallback,
        }
    }
}

fn build_form(dto: &SubmitResolutionDto) -> Result<ResolutionForm> {
    let mut form = ResolutionForm::new(dto.comments.clone());
    let inputs = [
        (MarkField::Attendance, &dto.attendance_mark),
        (MarkField::Assignment, &dto.assignment_mark),
        (MarkField::Ca, &dto.ca_mark),
        (MarkField::Final, &dto.final_mark),
    ];
    for (field, input) in inputs {
        if let Some(raw) = input {
            form.set_mark(field, raw)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
    }
    Ok(form)
}

fn classify_actor(actor: &AuthenticatedUser, view: Option<&UserView>) -> Result<ActorRole> {
    let office = view.and_then(|v| v.office.as_deref());
    ActorRole::classify(actor.role, actor.secondary_role, office).ok_or_else(|| {
        AppError::Forbidden("Students cannot act on complaint resolutions".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_form_rejects_out_of_range_input() {
        let dto = SubmitResolutionDto {
            comments: "ok".to_string(),
            attendance_mark: Some("11".to_string()),
            ..Default::default()
        };
        assert!(matches!(build_form(&dto), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_build_form_ignores_absent_and_empty_fields() {
        let dto = SubmitResolutionDto {
            comments: "ok".to_string(),
            attendance_mark: Some("".to_string()),
            final_mark: Some("60".to_string()),
            ..Default::default()
        };
        let form = build_form(&dto).unwrap();
        assert_eq!(form.mark(MarkField::Attendance), None);
        assert_eq!(form.mark(MarkField::Final), Some(60.0));
    }

    #[test]
    fn test_staff_message_falls_back_to_comment() {
        let dto = SubmitResolutionDto {
            comments: "please verify".to_string(),
            ..Default::default()
        };
        assert_eq!(dto.staff_message(), "please verify");

        let dto = SubmitResolutionDto {
            comments: "please verify".to_string(),
            message: Some("for your action".to_string()),
            ..Default::default()
        };
        assert_eq!(dto.staff_message(), "for your action");
    }
}
