//! Python bindings via PyO3

use crate::config::ConditionTable;
use crate::course::{CompletedCourses, CourseCode};
use crate::error::Result;
use crate::handbook::Handbook;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Prerequisite checker over a loaded condition table
#[pyclass(name = "Handbook", frozen)]
struct PyHandbook {
    inner: Handbook,
}

#[pymethods]
impl PyHandbook {
    /// Load conditions from a JSON file mapping course code to rule text
    #[staticmethod]
    fn from_json(path: PathBuf) -> PyResult<Self> {
        let table = ConditionTable::from_path(path)?;
        Ok(Self {
            inner: Handbook::new(table),
        })
    }

    /// Build from a dict of course code to rule text (or None)
    #[staticmethod]
    fn from_dict(conditions: HashMap<String, Option<String>>) -> PyResult<Self> {
        let table = conditions
            .into_iter()
            .map(|(code, rule)| Ok((CourseCode::new(&code)?, rule.unwrap_or_default())))
            .collect::<Result<ConditionTable>>()?;
        Ok(Self {
            inner: Handbook::new(table),
        })
    }

    /// Whether `target` is unlocked by `courses` (any iterable of codes)
    ///
    /// # Raises
    /// KeyError if `target` is unknown, ValueError if its rule is malformed
    fn is_unlocked(&self, courses: &Bound<'_, PyAny>, target: &str) -> PyResult<bool> {
        let mut completed = CompletedCourses::new();
        for item in courses.try_iter()? {
            let code: String = item?.extract()?;
            completed.insert(CourseCode::new(&code)?);
        }
        let target = CourseCode::new(target)?;
        Ok(self.inner.is_unlocked(&completed, &target)?)
    }

    /// Raw rule text for `target`
    fn rule(&self, target: &str) -> PyResult<String> {
        let target = CourseCode::new(target)?;
        Ok(self.inner.rule(&target)?.to_string())
    }

    fn __len__(&self) -> usize {
        self.inner.conditions().len()
    }
}

/// Python module definition
#[pymodule]
fn prereq_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHandbook>()?;
    Ok(())
}
