//! Condition table: course code to prerequisite rule text

use crate::config::ConditionLookup;
use crate::course::CourseCode;
use crate::error::Result;
use ahash::AHashMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read-only prerequisite rules, keyed by course.
///
/// Loaded once and never mutated. A course whose rule is `null` or `""` has no
/// prerequisites.
#[derive(Debug, Clone, Default)]
pub struct ConditionTable {
    rules: AHashMap<CourseCode, String>,
}

/// On-disk shape: `{"COMP1521": "Pre-requisite: COMP1511", "COMP1511": ""}`
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawConditions(HashMap<String, Option<String>>);

impl ConditionTable {
    /// Parse a JSON object of course code to rule text.
    ///
    /// # Errors
    ///
    /// `DeserializationError` for malformed JSON, `InvalidCourseCode` for a key that
    /// is not a course code.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConditions = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawConditions = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Load a condition table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), courses = table.len(), "loaded condition table");
        Ok(table)
    }

    fn from_raw(raw: RawConditions) -> Result<Self> {
        let mut rules = AHashMap::with_capacity(raw.0.len());
        for (key, rule) in raw.0 {
            let code = CourseCode::new(&key)?;
            rules.insert(code, rule.unwrap_or_default());
        }
        Ok(Self { rules })
    }

    /// Number of courses in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Courses in the table, in no particular order
    pub fn courses(&self) -> impl Iterator<Item = &CourseCode> {
        self.rules.keys()
    }
}

impl ConditionLookup for ConditionTable {
    fn lookup(&self, course: &CourseCode) -> Option<&str> {
        self.rules.get(course).map(String::as_str)
    }
}

impl FromIterator<(CourseCode, String)> for ConditionTable {
    fn from_iter<T: IntoIterator<Item = (CourseCode, String)>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
