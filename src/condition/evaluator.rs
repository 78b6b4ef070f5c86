//! Rule evaluator

use crate::condition::ast::Node;
use crate::condition::parser::parse_normalized;
use crate::condition::quantity::evaluate_requirement;
use crate::condition::tokenizer::normalize;
use crate::course::CompletedCourses;
use crate::error::{PrereqError, Result};

/// Evaluate an expression tree against the completed courses
pub fn check(node: &Node, completed: &CompletedCourses) -> Result<bool> {
    match node {
        Node::And(left, right) => Ok(check(left, completed)? && check(right, completed)?),
        Node::Or(left, right) => Ok(check(left, completed)? || check(right, completed)?),
        Node::Membership {
            condition,
            requirement,
        } => evaluate_requirement(condition, requirement, completed),
        Node::CoursePresence { present, .. } => Ok(*present),
        Node::RawLeaf(text) => Err(PrereqError::Structural(format!(
            "'{}' is not a condition",
            text
        ))),
    }
}

/// Check a raw rule against the completed courses.
///
/// A rule with no conditions always holds; any other rule fails for a
/// student with no completed courses, without being parsed.
pub fn is_rule_satisfied(rule: &str, completed: &CompletedCourses) -> Result<bool> {
    let normalized = normalize(rule);
    if normalized.is_empty() {
        return Ok(true);
    }
    if completed.is_empty() {
        return Ok(false);
    }

    let tree = parse_normalized(&normalized, completed)?;
    check(&tree, completed)
}
