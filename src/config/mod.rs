//! Configuration: the prerequisite condition table
//!
//! This module handles loading course rules from JSON and the lookup
//! interface the engine reads them through.

mod table;

pub use table::*;

use crate::course::CourseCode;
use std::collections::HashMap;

/// Read-only source of prerequisite rules.
///
/// `None` means the course is unknown; `Some("")` means it has no
/// prerequisites.
pub trait ConditionLookup {
    fn lookup(&self, course: &CourseCode) -> Option<&str>;
}

impl<S: std::hash::BuildHasher> ConditionLookup for HashMap<CourseCode, String, S> {
    fn lookup(&self, course: &CourseCode) -> Option<&str> {
        self.get(course).map(String::as_str)
    }
}

impl<T: ConditionLookup + ?Sized> ConditionLookup for &T {
    fn lookup(&self, course: &CourseCode) -> Option<&str> {
        (**self).lookup(course)
    }
}
