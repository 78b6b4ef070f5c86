//! Course handbook: prerequisite checks against a condition table

use crate::condition::{is_rule_satisfied, normalize, parse_normalized, Node};
use crate::config::{ConditionLookup, ConditionTable};
use crate::course::{CompletedCourses, CourseCode};
use crate::error::{PrereqError, Result};
use tracing::instrument;

/// Whether a student who completed `completed` may take `target`.
///
/// # Errors
///
/// `LookupMiss` if `target` is not in `lookup`; `Structural` or `Format` if its
/// rule cannot be parsed. A rule that fails to parse is never reported as
/// locked.
pub fn is_unlocked<L>(completed: &CompletedCourses, target: &CourseCode, lookup: &L) -> Result<bool>
where
    L: ConditionLookup + ?Sized,
{
    let rule = lookup
        .lookup(target)
        .ok_or_else(|| PrereqError::LookupMiss(target.clone()))?;
    is_rule_satisfied(rule, completed)
}

/// A loaded condition table with prerequisite queries on top
#[derive(Debug, Clone, Default)]
pub struct Handbook {
    conditions: ConditionTable,
}

impl Handbook {
    pub fn new(conditions: ConditionTable) -> Self {
        Self { conditions }
    }

    /// Whether `target` is unlocked for a student who completed `completed`
    #[instrument(level = "debug", skip_all, fields(target = %target, completed = completed.len()))]
    pub fn is_unlocked(&self, completed: &CompletedCourses, target: &CourseCode) -> Result<bool> {
        let unlocked = is_unlocked(completed, target, &self.conditions)?;
        tracing::debug!(unlocked, "evaluated prerequisites");
        Ok(unlocked)
    }

    /// Raw rule text for `target`; empty when it has no prerequisites
    pub fn rule(&self, target: &CourseCode) -> Result<&str> {
        self.conditions
            .lookup(target)
            .ok_or_else(|| PrereqError::LookupMiss(target.clone()))
    }

    /// Parsed rule for `target`, or `None` when it has no prerequisites
    pub fn tree(&self, target: &CourseCode, completed: &CompletedCourses) -> Result<Option<Node>> {
        let normalized = normalize(self.rule(target)?);
        if normalized.is_empty() {
            return Ok(None);
        }
        parse_normalized(&normalized, completed).map(Some)
    }

    pub fn conditions(&self) -> &ConditionTable {
        &self.conditions
    }
}

impl From<ConditionTable> for Handbook {
    fn from(conditions: ConditionTable) -> Self {
        Self::new(conditions)
    }
}
