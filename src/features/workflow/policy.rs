//! Category policy: which mark fields a category requires before a
//! resolution counts as complete, and the valid range for each field.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four mark fields a resolution can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkField {
    Attendance,
    Assignment,
    Ca,
    Final,
}

impl MarkField {
    /// Column/payload name for the field
    pub fn key(&self) -> &'static str {
        match self {
            MarkField::Attendance => "attendance_mark",
            MarkField::Assignment => "assignment_mark",
            MarkField::Ca => "ca_mark",
            MarkField::Final => "final_mark",
        }
    }

    /// Inclusive (min, max) accepted for this field
    pub fn range(&self) -> (f64, f64) {
        match self {
            MarkField::Attendance => (0.0, 10.0),
            MarkField::Assignment => (0.0, 20.0),
            MarkField::Ca => (0.0, 30.0),
            MarkField::Final => (0.0, 70.0),
        }
    }
}

/// Ordered mark fields a category requires. Matching is exact and
/// case-sensitive on the stored category name; anything unrecognized
/// requires no marks at all.
pub fn allowed_fields(category_name: &str) -> &'static [MarkField] {
    match category_name {
        "No CA Mark" => &[
            MarkField::Attendance,
            MarkField::Assignment,
            MarkField::Ca,
            MarkField::Final,
        ],
        "Missing Grade" => &[
            MarkField::Attendance,
            MarkField::Assignment,
            MarkField::Final,
            MarkField::Ca,
        ],
        "No Exam Mark" => &[
            MarkField::Final,
            MarkField::Attendance,
            MarkField::Assignment,
            MarkField::Ca,
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ca_mark_field_order() {
        assert_eq!(
            allowed_fields("No CA Mark"),
            &[
                MarkField::Attendance,
                MarkField::Assignment,
                MarkField::Ca,
                MarkField::Final,
            ]
        );
    }

    #[test]
    fn test_missing_grade_puts_final_before_ca() {
        assert_eq!(
            allowed_fields("Missing Grade"),
            &[
                MarkField::Attendance,
                MarkField::Assignment,
                MarkField::Final,
                MarkField::Ca,
            ]
        );
    }

    #[test]
    fn test_no_exam_mark_leads_with_final() {
        assert_eq!(allowed_fields("No Exam Mark")[0], MarkField::Final);
    }

    #[test]
    fn test_unmapped_names_require_no_fields() {
        assert!(allowed_fields("Not Satisfied With Final Grade").is_empty());
        assert!(allowed_fields("anything-unmapped").is_empty());
        assert!(allowed_fields("").is_empty());
        // Case-sensitive: a differently-cased known name is unmapped
        assert!(allowed_fields("no ca mark").is_empty());
    }

    #[test]
    fn test_ranges() {
        assert_eq!(MarkField::Attendance.range(), (0.0, 10.0));
        assert_eq!(MarkField::Assignment.range(), (0.0, 20.0));
        assert_eq!(MarkField::Ca.range(), (0.0, 30.0));
        assert_eq!(MarkField::Final.range(), (0.0, 70.0));
    }
}
