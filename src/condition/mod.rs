//! Prerequisite rule parsing and evaluation
//!
//! This module turns rule text like
//! "COMP1511 and (COMP1521 or 6 units of credit in COMP courses)"
//! into an expression tree and evaluates it against a student's
//! completed courses.

mod ast;
mod evaluator;
pub mod parser;
pub mod quantity;
pub mod tokenizer;

#[cfg(test)]
mod property_tests;

pub use ast::*;
pub use evaluator::*;
pub use parser::*;
pub use quantity::*;
pub use tokenizer::*;
