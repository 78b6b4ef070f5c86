//! Course code newtype

use crate::error::PrereqError;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref, str::FromStr};

/// Length of the subject prefix, e.g. `COMP`
pub const SUBJECT_LEN: usize = 4;

/// Length of the numeric part, e.g. `1511`
pub const NUMBER_LEN: usize = 4;

/// A canonical course code: four letters followed by four digits, upper case.
///
/// Parsing is case-insensitive; `"comp1511"` and `"COMP1511"` are the same
/// course.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Creates a course code, canonicalising to upper case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCourseCode` unless the trimmed input is exactly four
    /// ASCII letters followed by four ASCII digits.
    pub fn new(s: &str) -> Result<Self, PrereqError> {
        let s = s.trim();
        if !is_course_code(s) {
            return Err(PrereqError::InvalidCourseCode(s.to_string()));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Subject prefix, e.g. `COMP`
    pub fn subject(&self) -> &str {
        &self.0[..SUBJECT_LEN]
    }

    /// Numeric part, e.g. `1511`. The first digit is the course level.
    pub fn number(&self) -> &str {
        &self.0[SUBJECT_LEN..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether `s` is exactly a course code (any case, no surrounding text)
pub fn is_course_code(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == SUBJECT_LEN + NUMBER_LEN
        && bytes[..SUBJECT_LEN].iter().all(u8::is_ascii_alphabetic)
        && bytes[SUBJECT_LEN..].iter().all(u8::is_ascii_digit)
}

impl FromStr for CourseCode {
    type Err = PrereqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = PrereqError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for CourseCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
