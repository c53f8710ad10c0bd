use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for complaint category.
///
/// The name is a member of a closed set ("No CA Mark", "Missing Grade",
/// "No Exam Mark", "Not Satisfied With Final Grade"); the resolution
/// policy keys on it and maps anything else to "no marks required".
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
