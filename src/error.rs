//! Error types for the prerequisite engine

use crate::course::CourseCode;
use thiserror::Error;

/// Main error type for the prerequisite engine
#[derive(Error, Debug)]
pub enum PrereqError {
    /// The rule text could not be reduced to a single expression tree
    #[error("Malformed rule: {0}")]
    Structural(String),

    /// A quantity phrase is missing a number or a recognisable pattern
    #[error("Unrecognised quantity phrase: {0}")]
    Format(String),

    #[error("Course not found in condition table: {0}")]
    LookupMiss(CourseCode),

    #[error("Invalid course code: {0}")]
    InvalidCourseCode(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Failed to read condition table: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PrereqError {
    fn from(err: serde_json::Error) -> Self {
        PrereqError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<PrereqError> for pyo3::PyErr {
    fn from(err: PrereqError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};

        match err {
            PrereqError::Structural(msg) => {
                PyValueError::new_err(format!("Malformed rule: {}", msg))
            }
            PrereqError::Format(msg) => {
                PyValueError::new_err(format!("Unrecognised quantity phrase: {}", msg))
            }
            PrereqError::LookupMiss(code) => {
                PyKeyError::new_err(format!("Course not found in condition table: {}", code))
            }
            PrereqError::InvalidCourseCode(msg) => {
                PyValueError::new_err(format!("Invalid course code: {}", msg))
            }
            PrereqError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            PrereqError::Io(err) => {
                PyIOError::new_err(format!("Failed to read condition table: {}", err))
            }
        }
    }
}

/// Result type alias for the prerequisite engine
pub type Result<T> = std::result::Result<T, PrereqError>;
