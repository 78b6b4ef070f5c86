//! Course codes and completed-course sets

mod code;
mod completed;


pub use code::*;
pub use completed::*;
