use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{StaffDto, UserResponseDto};
use crate::features::users::models::{User, UserProfile, UserView};

const USER_COLUMNS: &str =
    "id, username, email, full_name, role, secondary_role, created_at, updated_at";

const PROFILE_COLUMNS: &str =
    "id, user_id, profile_type, student_number, office, created_at, updated_at";

/// Joined projection used for workflow gating decisions: the user row plus
/// the office from the admin profile, if one exists.
const VIEW_QUERY: &str = "\
    SELECT u.id, u.username, u.full_name, u.role, u.secondary_role, p.office \
    FROM users u \
    LEFT JOIN user_profiles p ON p.user_id = u.id AND p.profile_type = 'admin'";

/// Service for user queries
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all users with their profiles
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY username");
        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })?;

        let mut dtos = Vec::with_capacity(users.len());
        for user in users {
            let profiles = self.profiles_for(user.id).await?;
            dtos.push(UserResponseDto::from_parts(user, profiles));
        }
        Ok(dtos)
    }

    /// Get user by ID with profiles
    pub async fn get_by_id(&self, id: i64) -> Result<UserResponseDto> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by ID: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))?;

        let profiles = self.profiles_for(user.id).await?;
        Ok(UserResponseDto::from_parts(user, profiles))
    }

    async fn profiles_for(&self, user_id: i64) -> Result<Vec<UserProfile>> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load profiles for user {}: {:?}", user_id, e);
                AppError::Database(e)
            })
    }

    /// Flattened view of a single user for workflow dispatch
    pub async fn get_view(&self, id: i64) -> Result<UserView> {
        let query = format!("{VIEW_QUERY} WHERE u.id = $1");
        sqlx::query_as::<_, UserView>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load user view: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    /// All staff members (lecturers, admins, complaint coordinators),
    /// primary or secondary role.
    pub async fn list_staff_views(&self) -> Result<Vec<UserView>> {
        let query = format!(
            "{VIEW_QUERY} \
             WHERE u.role IN ('lecturer', 'admin', 'complaint_coordinator') \
                OR u.secondary_role IN ('lecturer', 'admin', 'complaint_coordinator') \
             ORDER BY u.username"
        );
        sqlx::query_as::<_, UserView>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list staff: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Staff list for the assignment picker
    pub async fn list_staff(&self) -> Result<Vec<StaffDto>> {
        let staff = self.list_staff_views().await?;
        Ok(staff
            .into_iter()
            .map(|s| StaffDto {
                id: s.id,
                username: s.username.clone(),
                full_name: s.full_name.clone(),
                role: s.role,
                office: s.office_display().to_string(),
            })
            .collect())
    }
}
