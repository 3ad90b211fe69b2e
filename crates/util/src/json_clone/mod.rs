//! Deep cloning of values.
//!
//! Maps and arrays are copied recursively, dates and regular expressions
//! are copied as whole units, and custom-typed instances are shared.

mod clone;

pub use clone::{clone, clone_filtered};
