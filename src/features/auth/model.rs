use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::users::models::UserRole;

/// The user extracted from a validated bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_role: Option<UserRole>,
}

impl AuthenticatedUser {
    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    /// Staff means anyone who can act on complaints: lecturers, admins
    /// and complaint coordinators, including via a secondary role.
    pub fn is_staff(&self) -> bool {
        let staff = |r: &UserRole| {
            matches!(
                r,
                UserRole::Lecturer | UserRole::Admin | UserRole::ComplaintCoordinator
            )
        };
        staff(&self.role) || self.secondary_role.as_ref().is_some_and(staff)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin || self.secondary_role == Some(UserRole::Admin)
    }
}
