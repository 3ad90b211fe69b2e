//! merge-deep-util - Value model and helpers for merge-deep
//!
//! This crate provides the dynamic [`Value`] type together with deep
//! cloning, deep equality, shape classification and the reserved-key
//! policy that the merger is built on.

pub mod classify;
pub mod error;
pub mod has_own_property;
pub mod json;
pub mod json_clone;
pub mod json_equal;
pub mod reserved_key;
pub mod value;

// Re-exports for convenience
pub use classify::{classify, is_plain_object, Kind};
pub use error::ValueError;
pub use has_own_property::{has_own_property, has_own_property_value};
pub use json::to_json;
pub use json_clone::{clone, clone_filtered};
pub use json_equal::{contains_deep, deep_equal};
pub use reserved_key::{is_reserved_key, RESERVED_KEYS};
pub use value::{Instance, Map, Opaque, RegExp, Value};
