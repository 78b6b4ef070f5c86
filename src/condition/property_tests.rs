//! Property tests for rule parsing and evaluation

use proptest::prelude::*;

use crate::condition::ast::Node;
use crate::condition::evaluator::{check, is_rule_satisfied};
use crate::condition::parser::parse;
use crate::course::{CompletedCourses, CourseCode};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

static POOL: [&str; 10] = [
    "COMP1511", "COMP1521", "COMP1531", "COMP2521", "COMP3121", "COMP3311", "MATH1081",
    "MATH1131", "SENG2011", "DPST1091",
];

/// Pick a course code from a small pool so that rules and sets overlap
fn course_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(&POOL[..])
}

/// Subset of the pool as a completed set
fn completed_strategy() -> impl Strategy<Value = CompletedCourses> {
    prop::sample::subsequence(&POOL[..], 0..=POOL.len())
        .prop_map(|codes| CompletedCourses::from_codes(codes).unwrap())
}

/// Non-empty completed set
fn non_empty_completed_strategy() -> impl Strategy<Value = CompletedCourses> {
    prop::sample::subsequence(&POOL[..], 1..=POOL.len())
        .prop_map(|codes| CompletedCourses::from_codes(codes).unwrap())
}

/// Arbitrary casing of a connective keyword
fn keyword_case_strategy(word: &'static str) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(word.to_string()),
        Just(word.to_uppercase()),
        Just(word[..1].to_uppercase() + &word[1..]),
    ]
}

fn has(completed: &CompletedCourses, code: &str) -> bool {
    completed.contains(&code.parse::<CourseCode>().unwrap())
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// A rule without conditions holds for every student
    #[test]
    fn prop_empty_rule_always_holds(
        completed in completed_strategy(),
        blank in "[ \t\n]{0,4}"
    ) {
        prop_assert!(is_rule_satisfied(&blank, &completed).unwrap());
    }

    /// A rule with conditions never holds for a student with no courses
    #[test]
    fn prop_no_courses_never_unlocks(a in course_strategy(), b in course_strategy()) {
        let rule = format!("{} or {}", a, b);
        prop_assert!(!is_rule_satisfied(&rule, &CompletedCourses::new()).unwrap());
    }

    /// "A and (B or C)" follows boolean logic
    #[test]
    fn prop_parenthesised_rule(
        a in course_strategy(),
        b in course_strategy(),
        c in course_strategy(),
        and in keyword_case_strategy("and"),
        or in keyword_case_strategy("or"),
        completed in non_empty_completed_strategy()
    ) {
        let rule = format!("{} {} ({} {} {})", a, and, b, or, c);
        let expected = has(&completed, a) && (has(&completed, b) || has(&completed, c));
        prop_assert_eq!(is_rule_satisfied(&rule, &completed).unwrap(), expected, "Rule: {}", rule);
    }

    /// "A or B and C" groups as "A or (B and C)"
    #[test]
    fn prop_or_then_and_groups_right(
        a in course_strategy(),
        b in course_strategy(),
        c in course_strategy(),
        completed in non_empty_completed_strategy()
    ) {
        let rule = format!("{} or {} and {}", a, b, c);

        let tree = parse(&rule, &completed).unwrap();
        let is_or_of_and = matches!(&tree, Node::Or(_, right) if matches!(**right, Node::And(_, _)));
        prop_assert!(is_or_of_and, "Rule {} parsed as {}", rule, tree);

        let expected = has(&completed, a) || (has(&completed, b) && has(&completed, c));
        prop_assert_eq!(check(&tree, &completed).unwrap(), expected);
    }

    /// "Completion of 6N units of credit" holds iff at least N courses are done
    #[test]
    fn prop_credit_completion(courses in 0..=8u64, completed in non_empty_completed_strategy()) {
        let rule = format!("Completion of {} units of credit", courses * 6);
        let expected = completed.len() as u64 >= courses;
        prop_assert_eq!(is_rule_satisfied(&rule, &completed).unwrap(), expected);
    }

    /// "6N units of credit in COMP courses" counts COMP courses only
    #[test]
    fn prop_subject_count(courses in 1..=6u64, completed in non_empty_completed_strategy()) {
        let rule = format!("{} units of credit in COMP courses", courses * 6);
        let comp = completed.iter().filter(|code| code.subject() == "COMP").count() as u64;
        prop_assert_eq!(is_rule_satisfied(&rule, &completed).unwrap(), comp >= courses);
    }

    /// The list rule compares the intersection against the raw number
    #[test]
    fn prop_list_intersection_raw_threshold(
        threshold in 1..=3u64,
        completed in non_empty_completed_strategy()
    ) {
        let rule = format!("{} units of credit in (COMP1511, COMP1521)", threshold);
        let hits = ["COMP1511", "COMP1521"].iter().filter(|code| has(&completed, code)).count() as u64;
        prop_assert_eq!(is_rule_satisfied(&rule, &completed).unwrap(), hits >= threshold);
    }

    /// Evaluating the same rule twice gives the same answer
    #[test]
    fn prop_evaluation_is_idempotent(
        a in course_strategy(),
        b in course_strategy(),
        completed in completed_strategy()
    ) {
        let rule = format!("{} and ({} or 12 units of credit in level 1 COMP courses)", a, b);
        let first = is_rule_satisfied(&rule, &completed).unwrap();
        let second = is_rule_satisfied(&rule, &completed).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Trees render and the rendering names every course in the rule
    #[test]
    fn prop_display_mentions_courses(
        a in course_strategy(),
        b in course_strategy(),
        completed in completed_strategy()
    ) {
        let tree = parse(&format!("{} and {}", a, b), &completed).unwrap();
        let rendered = tree.to_string();
        prop_assert!(rendered.contains(a) && rendered.contains(b), "{}", rendered);
    }
}
