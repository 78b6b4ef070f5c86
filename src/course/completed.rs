//! The set of courses a student has completed

use crate::course::CourseCode;
use crate::error::Result;
use ahash::AHashSet;

/// Courses a student has completed. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedCourses {
    courses: AHashSet<CourseCode>,
}

impl CompletedCourses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw code strings, canonicalising each one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCourseCode` for the first entry that is not a course code.
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|code| CourseCode::new(code.as_ref()))
            .collect()
    }

    /// Number of completed courses
    #[inline]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[inline]
    pub fn contains(&self, code: &CourseCode) -> bool {
        self.courses.contains(code)
    }

    /// Insert a course, returning `false` if it was already present
    pub fn insert(&mut self, code: CourseCode) -> bool {
        self.courses.insert(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseCode> {
        self.courses.iter()
    }
}

impl FromIterator<CourseCode> for CompletedCourses {
    fn from_iter<T: IntoIterator<Item = CourseCode>>(iter: T) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

impl Extend<CourseCode> for CompletedCourses {
    fn extend<T: IntoIterator<Item = CourseCode>>(&mut self, iter: T) {
        self.courses.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CompletedCourses {
    type Item = &'a CourseCode;
    type IntoIter = std::collections::hash_set::Iter<'a, CourseCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}
