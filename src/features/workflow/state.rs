//! Actor classification and the consolidated per-action workflow state.
//!
//! Every gating decision the engine makes is derived here, once, from
//! (complaint, resolution, actor) instead of being recomputed ad hoc at
//! each call site.

use crate::features::complaints::models::ComplaintStatus;
use crate::features::users::models::UserRole;
use crate::features::workflow::form::ResolutionForm;
use crate::features::workflow::policy::{allowed_fields, MarkField};
use crate::shared::constants::{normalize_office, OFFICE_FINANCE, OFFICE_REGISTRAR};

/// Workflow capability of the acting user. Admins split by the office on
/// their admin profile; everyone else maps straight from their role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Registrar,
    Finance,
    GenericAdmin,
    Lecturer,
    ComplaintCoordinator,
}

impl ActorRole {
    /// Classify an actor from role and admin-profile office. The office is
    /// compared in normalized form so "Registrar Office" and
    /// "registrar_office" dispatch identically. A missing office ("Unknown"
    /// fallback included) makes an admin generic.
    pub fn classify(
        role: UserRole,
        secondary_role: Option<UserRole>,
        office: Option<&str>,
    ) -> Option<ActorRole> {
        let effective = match role {
            UserRole::Student => secondary_role?,
            other => other,
        };

        match effective {
            UserRole::Admin => {
                let normalized = office.map(normalize_office);
                match normalized.as_deref() {
                    Some(OFFICE_REGISTRAR) => Some(ActorRole::Registrar),
                    Some(OFFICE_FINANCE) => Some(ActorRole::Finance),
                    _ => Some(ActorRole::GenericAdmin),
                }
            }
            UserRole::Lecturer => Some(ActorRole::Lecturer),
            UserRole::ComplaintCoordinator => Some(ActorRole::ComplaintCoordinator),
            UserRole::Student => None,
        }
    }
}

/// Everything the engine needs to know about one pending action.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub complaint_id: i64,
    pub status: ComplaintStatus,
    pub student_id: Option<i64>,
    pub actor_id: i64,
    pub actor_role: ActorRole,
    pub allowed: &'static [MarkField],
    pub form_filled: bool,
    pub existing_resolution_id: Option<i64>,
}

impl WorkflowState {
    pub fn derive(
        complaint_id: i64,
        status: ComplaintStatus,
        student_id: Option<i64>,
        actor_id: i64,
        actor_role: ActorRole,
        category_name: &str,
        form: &ResolutionForm,
        existing_resolution_id: Option<i64>,
    ) -> Self {
        let allowed = allowed_fields(category_name);
        Self {
            complaint_id,
            status,
            student_id,
            actor_id,
            actor_role,
            allowed,
            form_filled: form.is_filled(allowed),
            existing_resolution_id,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status == ComplaintStatus::Resolved
    }

    /// Whether a staff member with the given office may be chosen as an
    /// assignment target. Registrar-office staff stay unselectable until
    /// the category-required marks are all supplied, so nothing reaches
    /// the registrar half-filled.
    pub fn staff_selectable(&self, staff_office: Option<&str>) -> bool {
        let is_registrar_office = staff_office
            .map(|o| normalize_office(o) == OFFICE_REGISTRAR)
            .unwrap_or(false);
        !is_registrar_office || self.form_filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_form(category: &str, form: &ResolutionForm) -> WorkflowState {
        WorkflowState::derive(
            42,
            ComplaintStatus::Open,
            Some(5),
            1,
            ActorRole::Lecturer,
            category,
            form,
            None,
        )
    }

    #[test]
    fn test_classify_admin_by_office() {
        let classify = |office| ActorRole::classify(UserRole::Admin, None, office);

        assert_eq!(classify(Some("Registrar Office")), Some(ActorRole::Registrar));
        assert_eq!(classify(Some("registrar_office")), Some(ActorRole::Registrar));
        assert_eq!(classify(Some("Finance Department")), Some(ActorRole::Finance));
        assert_eq!(classify(Some("Faculty")), Some(ActorRole::GenericAdmin));
        assert_eq!(classify(Some("Unknown")), Some(ActorRole::GenericAdmin));
        assert_eq!(classify(None), Some(ActorRole::GenericAdmin));
    }

    #[test]
    fn test_classify_non_admin_roles() {
        assert_eq!(
            ActorRole::classify(UserRole::Lecturer, None, None),
            Some(ActorRole::Lecturer)
        );
        assert_eq!(
            ActorRole::classify(UserRole::ComplaintCoordinator, None, None),
            Some(ActorRole::ComplaintCoordinator)
        );
        assert_eq!(ActorRole::classify(UserRole::Student, None, None), None);
        // A student with a staff secondary role acts in that capacity
        assert_eq!(
            ActorRole::classify(UserRole::Student, Some(UserRole::Lecturer), None),
            Some(ActorRole::Lecturer)
        );
    }

    #[test]
    fn test_registrar_staff_gated_on_form_fill() {
        let mut form = ResolutionForm::new("c");
        let unfilled = state_with_form("No Exam Mark", &form);
        assert!(!unfilled.staff_selectable(Some("Registrar Office")));
        assert!(unfilled.staff_selectable(Some("Faculty")));
        assert!(unfilled.staff_selectable(None));

        for field in allowed_fields("No Exam Mark") {
            form.set_mark(*field, "5").unwrap();
        }
        let filled = state_with_form("No Exam Mark", &form);
        assert!(filled.staff_selectable(Some("registrar_office")));
    }

    #[test]
    fn test_empty_category_is_vacuously_filled() {
        let form = ResolutionForm::new("c");
        let state = state_with_form("Not Satisfied With Final Grade", &form);
        assert!(state.form_filled);
        assert!(state.staff_selectable(Some("Registrar Office")));
    }
}
