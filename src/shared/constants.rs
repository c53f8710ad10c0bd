/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// OFFICE CONSTANTS
// =============================================================================

/// Admin-profile office that selects the registrar sub-workflow.
/// Stored values vary between "Registrar Office" and "registrar_office";
/// comparisons are done on the normalized form.
pub const OFFICE_REGISTRAR: &str = "registrar_office";

/// Admin-profile office that selects the finance sub-workflow
pub const OFFICE_FINANCE: &str = "finance_department";

/// Normalize an office value for comparison ("Registrar Office" -> "registrar_office")
pub fn normalize_office(office: &str) -> String {
    office.trim().to_lowercase().replace(' ', "_")
}

/// How many days a new complaint gets before its deadline
pub const COMPLAINT_DEADLINE_DAYS: i64 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_office() {
        assert_eq!(normalize_office("Registrar Office"), OFFICE_REGISTRAR);
        assert_eq!(normalize_office("registrar_office"), OFFICE_REGISTRAR);
        assert_eq!(normalize_office("Finance Department"), OFFICE_FINANCE);
        assert_eq!(normalize_office("  Faculty "), "faculty");
    }
}
