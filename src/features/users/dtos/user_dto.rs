use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::users::models::{User, UserProfile, UserRole};

/// Response DTO for user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_role: Option<UserRole>,
    pub profiles: Vec<ProfileDto>,
}

/// One role-specific profile attached to a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    #[serde(rename = "type")]
    pub profile_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
}

impl From<UserProfile> for ProfileDto {
    fn from(p: UserProfile) -> Self {
        Self {
            profile_type: p.profile_type,
            student_number: p.student_number,
            office: p.office,
        }
    }
}

impl UserResponseDto {
    pub fn from_parts(user: User, profiles: Vec<UserProfile>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            secondary_role: user.secondary_role,
            profiles: profiles.into_iter().map(ProfileDto::from).collect(),
        }
    }
}

/// Compact staff entry for the assignment picker. Registrar gating is
/// form-dependent and therefore enforced when a submission selects
/// staff, not here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffDto {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
    pub office: String,
}
