//! Pending resolution form state: raw mark inputs parsed and range-checked
//! before anything is dispatched.

use std::collections::HashMap;

use thiserror::Error;

use crate::features::workflow::policy::MarkField;

#[derive(Debug, Error, PartialEq)]
pub enum MarkError {
    #[error("{0} must be a number")]
    Format(&'static str),

    #[error("{field} must be between {min} and {max}")]
    Range {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// Mark/comment state accumulated while a resolver fills the form.
/// Values are stored only once parsed and range-checked; a rejected input
/// leaves the previous state untouched.
#[derive(Debug, Clone, Default)]
pub struct ResolutionForm {
    marks: HashMap<MarkField, f64>,
    pub comments: String,
}

impl ResolutionForm {
    pub fn new(comments: impl Into<String>) -> Self {
        Self {
            marks: HashMap::new(),
            comments: comments.into(),
        }
    }

    /// Apply a raw text input to a mark field.
    ///
    /// An empty input clears the field (and any previous error condition)
    /// without being treated as a number. Anything non-numeric is a format
    /// error, anything outside the field's inclusive range is a range
    /// error; either way the stored value is unchanged.
    pub fn set_mark(&mut self, field: MarkField, input: &str) -> Result<(), MarkError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.marks.remove(&field);
            return Ok(());
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| MarkError::Format(field.key()))?;
        if value.is_nan() {
            return Err(MarkError::Format(field.key()));
        }

        let (min, max) = field.range();
        if value < min || value > max {
            return Err(MarkError::Range {
                field: field.key(),
                min,
                max,
            });
        }

        self.marks.insert(field, value);
        Ok(())
    }

    pub fn mark(&self, field: MarkField) -> Option<f64> {
        self.marks.get(&field).copied()
    }

    /// True iff every required field has a value. An empty requirement set
    /// is vacuously filled.
    pub fn is_filled(&self, required: &[MarkField]) -> bool {
        required.iter().all(|f| self.marks.contains_key(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_boundary() {
        let mut form = ResolutionForm::new("ok");

        assert_eq!(form.set_mark(MarkField::Attendance, "10"), Ok(()));
        assert_eq!(form.mark(MarkField::Attendance), Some(10.0));

        // 11 is out of range and must not clobber the stored 10
        assert_eq!(
            form.set_mark(MarkField::Attendance, "11"),
            Err(MarkError::Range {
                field: "attendance_mark",
                min: 0.0,
                max: 10.0,
            })
        );
        assert_eq!(form.mark(MarkField::Attendance), Some(10.0));
    }

    #[test]
    fn test_empty_input_clears_without_format_error() {
        let mut form = ResolutionForm::new("ok");
        form.set_mark(MarkField::Attendance, "7").unwrap();

        assert_eq!(form.set_mark(MarkField::Attendance, ""), Ok(()));
        assert_eq!(form.mark(MarkField::Attendance), None);
    }

    #[test]
    fn test_non_numeric_input_is_a_format_error() {
        let mut form = ResolutionForm::new("ok");
        assert_eq!(
            form.set_mark(MarkField::Ca, "twenty"),
            Err(MarkError::Format("ca_mark"))
        );
        assert_eq!(
            form.set_mark(MarkField::Ca, "NaN"),
            Err(MarkError::Format("ca_mark"))
        );
        assert_eq!(form.mark(MarkField::Ca), None);
    }

    #[test]
    fn test_vacuously_filled_when_nothing_required() {
        let form = ResolutionForm::new("ok");
        assert!(form.is_filled(&[]));
        assert!(!form.is_filled(&[MarkField::Final]));
    }

    #[test]
    fn test_filled_once_all_required_fields_present() {
        let mut form = ResolutionForm::new("reviewed");
        let required = [MarkField::Attendance, MarkField::Final];

        form.set_mark(MarkField::Attendance, "8").unwrap();
        assert!(!form.is_filled(&required));

        form.set_mark(MarkField::Final, "60").unwrap();
        assert!(form.is_filled(&required));
    }
}
