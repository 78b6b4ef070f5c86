//! Quantity requirements: credit completion, subject/level counts and
//! explicit course lists

use crate::course::{CompletedCourses, CourseCode, NUMBER_LEN};
use crate::error::{PrereqError, Result};
use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Every course is worth the same amount of credit
pub const UNITS_PER_COURSE: u64 = 6;

/// Condition word for "completion of N units of credit"
pub const COMPLETION: &str = "completion";

static UNITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+) units").expect("units regex"));

static SUBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b([a-z]{4}) courses").expect("subject regex"));

static LEVEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)level (\d+)").expect("level regex"));

/// Decide whether `completed` satisfies a quantity requirement.
///
/// * `condition == "completion"`: the requirement holds a credit total and
///   every completed course counts towards it.
/// * requirement names `<SUBJ> courses`: count completed courses of that
///   subject, optionally restricted to `level <n>`.
/// * otherwise the requirement is an explicit course list. The intersection
///   size is compared against the raw number in the condition, not against
///   a course count.
pub fn evaluate_requirement(
    condition: &str,
    requirement: &str,
    completed: &CompletedCourses,
) -> Result<bool> {
    if condition == COMPLETION {
        let units = units_of_credit(requirement)?;
        tracing::debug!(units, completed = completed.len(), "credit completion requirement");
        return Ok(meets_units(completed.len(), units));
    }

    let units = units_of_credit(condition)?;

    if is_course_filter(requirement) {
        let filter = CourseFilter::parse(requirement)?;
        let count = completed.iter().filter(|code| filter.matches(code)).count();
        tracing::debug!(units, count, ?filter, "subject count requirement");
        return Ok(meets_units(count, units));
    }

    let listed = listed_courses(requirement)?;
    let count = listed.iter().filter(|code| completed.contains(code)).count();
    tracing::debug!(threshold = units, count, "course list requirement");
    Ok(count as u64 >= units)
}

/// Extract N from "... N units ..."
pub fn units_of_credit(text: &str) -> Result<u64> {
    let digits = UNITS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| PrereqError::Format(format!("no units of credit in '{}'", text)))?;

    digits
        .as_str()
        .parse()
        .map_err(|_| PrereqError::Format(format!("units of credit out of range in '{}'", text)))
}

/// Whether `count` courses carry at least `units` units of credit
#[inline]
fn meets_units(count: usize, units: u64) -> bool {
    (count as u64).saturating_mul(UNITS_PER_COURSE) >= units
}

fn is_course_filter(requirement: &str) -> bool {
    !requirement.contains(',')
        && requirement
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == "courses")
}

/// Subject and optional level from "level 3 comp courses"
#[derive(Debug, Clone, PartialEq, Eq)]
struct CourseFilter {
    subject: String,
    level: Option<String>,
}

impl CourseFilter {
    fn parse(requirement: &str) -> Result<Self> {
        let subject = SUBJECT
            .captures(requirement)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| {
                PrereqError::Format(format!("no subject before 'courses' in '{}'", requirement))
            })?
            .as_str()
            .to_ascii_uppercase();

        let level = LEVEL
            .captures(requirement)
            .and_then(|caps| caps.get(1))
            .map(|level| level.as_str().to_string());

        Ok(Self { subject, level })
    }

    fn matches(&self, code: &CourseCode) -> bool {
        if code.subject() != self.subject {
            return false;
        }
        match &self.level {
            // Level prefix plus three more digits must make up the number
            Some(level) => {
                level.len() + 3 == NUMBER_LEN && code.number().starts_with(level.as_str())
            }
            None => true,
        }
    }
}

/// Course codes in "(comp6443, comp6843, ...)"; entries that are not codes
/// are skipped.
fn listed_courses(requirement: &str) -> Result<AHashSet<CourseCode>> {
    let listed: AHashSet<CourseCode> = requirement
        .split(|c: char| c == ',' || c == '(' || c == ')')
        .filter_map(|entry| CourseCode::new(entry).ok())
        .collect();

    if listed.is_empty() {
        return Err(PrereqError::Format(format!(
            "no course codes in '{}'",
            requirement
        )));
    }
    Ok(listed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(codes: &[&str]) -> CompletedCourses {
        CompletedCourses::from_codes(codes).unwrap()
    }

    #[test]
    fn test_units_of_credit() {
        assert_eq!(units_of_credit("12 units of credit").unwrap(), 12);
        assert_eq!(units_of_credit("of 102 units of credit").unwrap(), 102);
        assert!(matches!(units_of_credit("some credit"), Err(PrereqError::Format(_))));
        assert!(matches!(
            units_of_credit("99999999999999999999999 units"),
            Err(PrereqError::Format(_))
        ));
    }

    #[test]
    fn test_completion_threshold() {
        let three = completed(&["COMP1511", "COMP1521", "COMP1531"]);
        let four = completed(&["COMP1511", "COMP1521", "COMP1531", "MATH1081"]);

        assert!(!evaluate_requirement("completion", "of 24 units of credit", &three).unwrap());
        assert!(evaluate_requirement("completion", "of 24 units of credit", &four).unwrap());
    }

    #[test]
    fn test_completion_rounds_partial_courses_up() {
        // 8 units needs two whole courses
        let one = completed(&["COMP1511"]);
        let two = completed(&["COMP1511", "COMP1521"]);
        assert!(!evaluate_requirement("completion", "of 8 units of credit", &one).unwrap());
        assert!(evaluate_requirement("completion", "of 8 units of credit", &two).unwrap());
    }

    #[test]
    fn test_completion_without_number_is_format_error() {
        let err = evaluate_requirement("completion", "of the degree", &completed(&["COMP1511"]))
            .unwrap_err();
        assert!(matches!(err, PrereqError::Format(_)));
    }

    #[test]
    fn test_subject_count() {
        let s = completed(&["COMP1511", "MATH1081"]);
        assert!(evaluate_requirement("6 units of credit", "comp courses", &s).unwrap());
        assert!(!evaluate_requirement("12 units of credit", "comp courses", &s).unwrap());
        assert!(!evaluate_requirement("6 units of credit", "seng courses", &s).unwrap());
    }

    #[test]
    fn test_subject_level_count() {
        let s = completed(&["COMP3121", "COMP3311", "COMP2521", "MATH3411"]);
        assert!(evaluate_requirement("12 units of credit", "level 3 comp courses", &s).unwrap());
        assert!(!evaluate_requirement("18 units of credit", "level 3 comp courses", &s).unwrap());
        assert!(!evaluate_requirement("6 units of credit", "level 4 comp courses", &s).unwrap());
    }

    #[test]
    fn test_multi_digit_level_matches_nothing() {
        let s = completed(&["COMP1011", "COMP1511"]);
        assert!(!evaluate_requirement("6 units of credit", "level 10 comp courses", &s).unwrap());
    }

    #[test]
    fn test_subject_missing_is_format_error() {
        let err = evaluate_requirement("6 units of credit", "any courses", &completed(&["COMP1511"]))
            .unwrap_err();
        // "any" is only three letters
        assert!(matches!(err, PrereqError::Format(_)));
    }

    #[test]
    fn test_list_intersection_uses_raw_threshold() {
        // The list rule compares against N itself, not N / 6
        let both = completed(&["COMP1511", "COMP1521"]);
        let one = completed(&["COMP1511"]);
        let requirement = "(comp1511, comp1521)";

        assert!(evaluate_requirement("2 units of credit", requirement, &both).unwrap());
        assert!(!evaluate_requirement("2 units of credit", requirement, &one).unwrap());
        assert!(!evaluate_requirement("12 units of credit", requirement, &both).unwrap());
    }

    #[test]
    fn test_list_ignores_duplicates_and_noise() {
        let s = completed(&["COMP6443"]);
        assert!(evaluate_requirement(
            "1 units of credit",
            "(comp6443, comp6443, and more)",
            &s
        )
        .unwrap());
    }

    #[test]
    fn test_list_without_codes_is_format_error() {
        let err = evaluate_requirement("6 units of credit", "the following", &completed(&["COMP1511"]))
            .unwrap_err();
        assert!(matches!(err, PrereqError::Format(_)));
    }

    #[test]
    fn test_condition_without_number_is_format_error() {
        let err = evaluate_requirement("credit", "comp courses", &completed(&["COMP1511"]))
            .unwrap_err();
        assert!(matches!(err, PrereqError::Format(_)));
    }

    #[test]
    fn test_course_filter_matches_whole_word() {
        let s = completed(&["COMP1511", "COMP1521"]);
        assert!(evaluate_requirement("12 units of credit", "(level 1 comp courses)", &s).unwrap());
        assert!(is_course_filter("level 1 comp courses)"));
        assert!(!is_course_filter("(comp1511, courses)"));
    }
}
