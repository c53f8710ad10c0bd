//! Canonical notification texts for each workflow transition.

/// To every staff member when the registrar resolves a complaint
pub fn staff_registrar_resolved(complaint_id: i64) -> String {
    format!("Complaint {complaint_id} resolved by Registrar's Office")
}

/// To the student when the registrar resolves their complaint
pub fn student_registrar_resolved() -> String {
    "Your complaint has been resolved by the Registrar's Office".to_string()
}

/// To the student when a lecturer/admin submits a resolution for review
pub fn student_awaiting_approval(complaint_id: i64) -> String {
    format!("Your complaint {complaint_id} is awaiting approval at Registrar's Office")
}

/// To the student when their complaint is routed to additional staff
pub fn student_faculty_level(complaint_id: i64) -> String {
    format!("Your complaint {complaint_id} is being handled at Faculty Level")
}

/// To every admin when a resolver creates or updates a resolution
pub fn admin_resolution_activity(resolver: &str, complaint_id: i64, updated: bool) -> String {
    let verb = if updated { "updated" } else { "provided" };
    format!("{resolver} {verb} resolution for complaint {complaint_id}")
}

/// To the resolver themselves after a first submission
pub fn resolver_self() -> String {
    "Good job!!".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_activity_verb_tracks_create_vs_update() {
        assert_eq!(
            admin_resolution_activity("Dr. Okafor", 42, false),
            "Dr. Okafor provided resolution for complaint 42"
        );
        assert_eq!(
            admin_resolution_activity("Dr. Okafor", 42, true),
            "Dr. Okafor updated resolution for complaint 42"
        );
    }
}
