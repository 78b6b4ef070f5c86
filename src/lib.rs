//! Prereq Core - course prerequisite rule engine
//!
//! This crate parses semi-structured prerequisite text such as
//! "COMP1511 and (COMP1521 or 6 units of credit in COMP courses)"
//! and decides whether a student's completed courses satisfy it.
//!
//! ```
//! use prereq_core::{is_unlocked, CompletedCourses, ConditionTable};
//!
//! let table = ConditionTable::from_json_str(
//!     r#"{"COMP2511": "Prerequisite: COMP1531 AND (COMP2521 OR COMP1927)"}"#,
//! )?;
//! let completed = CompletedCourses::from_codes(["COMP1531", "COMP2521"])?;
//!
//! assert!(is_unlocked(&completed, &"COMP2511".parse()?, &table)?);
//! # Ok::<(), prereq_core::PrereqError>(())
//! ```
//!
//! With the `python` feature the engine is also exposed as a Python
//! extension module.

pub mod condition;
pub mod config;
pub mod course;
pub mod error;
pub mod handbook;

#[cfg(feature = "python")]
mod python;

pub use crate::condition::{is_rule_satisfied, Node};
pub use crate::config::{ConditionLookup, ConditionTable};
pub use crate::course::{CompletedCourses, CourseCode};
pub use crate::error::{PrereqError, Result};
pub use crate::handbook::{is_unlocked, Handbook};
