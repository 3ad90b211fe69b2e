//! Deep equality for values.

mod deep_equal;

pub use deep_equal::{contains_deep, deep_equal};
