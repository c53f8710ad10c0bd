use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating semester labels, e.g. "Fall 2025" or "Spring 2024"
    pub static ref SEMESTER_REGEX: Regex = Regex::new(r"^(Fall|Spring|Summer) \d{4}$").unwrap();

    /// Regex for validating course codes, e.g. "CSC301", "MAT102"
    pub static ref COURSE_CODE_REGEX: Regex = Regex::new(r"^[A-Z]{2,4}\d{3}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_regex() {
        assert!(SEMESTER_REGEX.is_match("Fall 2025"));
        assert!(SEMESTER_REGEX.is_match("Spring 2024"));
        assert!(!SEMESTER_REGEX.is_match("Winter 2025"));
        assert!(!SEMESTER_REGEX.is_match("fall 2025"));
    }

    #[test]
    fn test_course_code_regex() {
        assert!(COURSE_CODE_REGEX.is_match("CSC301"));
        assert!(COURSE_CODE_REGEX.is_match("MAT102"));
        assert!(!COURSE_CODE_REGEX.is_match("csc301"));
        assert!(!COURSE_CODE_REGEX.is_match("C301"));
    }
}
