use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// User role enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Lecturer,
    Admin,
    ComplaintCoordinator,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "Student"),
            UserRole::Lecturer => write!(f, "Lecturer"),
            UserRole::Admin => write!(f, "Admin"),
            UserRole::ComplaintCoordinator => write!(f, "Complaint Coordinator"),
        }
    }
}

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub secondary_role: Option<UserRole>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for a role-specific profile row.
/// type = "student" carries student_number, type = "admin" carries office.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub profile_type: String,
    pub student_number: Option<String>,
    pub office: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flattened user projection the workflow engine works with:
/// the user row joined with the admin-profile office, if any.
#[derive(Debug, Clone, FromRow)]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
    pub secondary_role: Option<UserRole>,
    pub office: Option<String>,
}

impl UserView {
    /// Display value for the office, "Unknown" when the lookup failed or
    /// the user has no admin profile.
    pub fn office_display(&self) -> &str {
        self.office.as_deref().filter(|o| !o.is_empty()).unwrap_or("Unknown")
    }
}
