//! Recursively merge values without mutating the inputs.
//!
//! A merge starts from a deep clone of the base value and folds each
//! override into it, left to right:
//!
//! - two maps merge field by field;
//! - an existing array takes the union of itself and the incoming array
//!   (or single non-map item), skipping deep-equal duplicates;
//! - anything else is replaced by a clone of the incoming value.
//!
//! Keys such as `__proto__` and `constructor` are never assigned into the
//! result.
//!
//! # Example
//!
//! ```
//! use merge_deep::{merge_all, Value};
//! use serde_json::json;
//!
//! let base = Value::from(json!({"a": {"b": 1, "c": 1}, "tags": ["x"]}));
//! let merged = merge_all(
//!     &base,
//!     &[
//!         Value::from(json!({"a": {"b": 2}, "tags": ["y"]})),
//!         Value::from(json!({"tags": "x"})),
//!     ],
//! );
//!
//! assert_eq!(merged, Value::from(json!({"a": {"b": 2, "c": 1}, "tags": ["x", "y"]})));
//! ```

use serde_json::Value as JsonValue;

pub mod merger;
pub mod options;

pub use merge_deep_util::{
    classify, clone, deep_equal, is_plain_object, to_json, Instance, Kind, Map, Opaque, RegExp,
    Value, ValueError,
};
pub use merger::Merger;
pub use options::{ArrayMerge, MergeOptions};

/// Merges a single override into `base` with default options.
///
/// # Examples
///
/// ```
/// use merge_deep::{merge, Value};
/// use serde_json::json;
///
/// let merged = merge(
///     &Value::from(json!({"a": {"b": 1, "c": 1, "d": {"e": 1, "f": 1}}})),
///     &Value::from(json!({"a": {"b": 2, "d": {"f": "f"}}})),
/// );
/// assert_eq!(merged, Value::from(json!({"a": {"b": 2, "c": 1, "d": {"e": 1, "f": "f"}}})));
/// ```
pub fn merge(base: &Value, override_: &Value) -> Value {
    Merger::default().merge(base, override_)
}

/// Merges `overrides` into `base`, left to right, with default options.
///
/// With an empty `overrides` this is a deep clone of `base`.
pub fn merge_all(base: &Value, overrides: &[Value]) -> Value {
    Merger::default().merge_all(base, overrides)
}

/// Merges `overrides` into `base` with the given options.
pub fn merge_with(options: MergeOptions, base: &Value, overrides: &[Value]) -> Value {
    Merger::new(options).merge_all(base, overrides)
}

/// Merges JSON documents.
///
/// # Errors
///
/// Returns [`ValueError::NotRepresentable`] only when the merged tree holds
/// a value JSON cannot represent. Inputs built from JSON never produce one.
///
/// # Examples
///
/// ```
/// use merge_deep::merge_json;
/// use serde_json::json;
///
/// let merged = merge_json(&json!({"a": [1, 2, [3, 4]]}), &[json!({"a": [5, 6]})]).unwrap();
/// assert_eq!(merged, json!({"a": [1, 2, [3, 4], 5, 6]}));
/// ```
pub fn merge_json(base: &JsonValue, overrides: &[JsonValue]) -> Result<JsonValue, ValueError> {
    let overrides: Vec<Value> = overrides.iter().map(Value::from).collect();
    to_json(&merge_all(&Value::from(base), &overrides))
}

/// Merges any number of overrides into a base value.
///
/// Each argument is converted with `Value::from`, so `serde_json::Value`s
/// can be passed directly.
///
/// ```
/// use merge_deep::{merge_deep, Value};
/// use serde_json::json;
///
/// let merged = merge_deep!(json!({"a": ["foo"]}), json!({"a": ["bar"]}), json!({"a": "foo"}));
/// assert_eq!(merged, Value::from(json!({"a": ["foo", "bar"]})));
///
/// let cloned = merge_deep!(json!([1, 2, 3]));
/// assert_eq!(cloned, Value::from(json!([1, 2, 3])));
/// ```
#[macro_export]
macro_rules! merge_deep {
    ($base:expr $(, $override:expr)* $(,)?) => {
        $crate::merge_all(
            &$crate::Value::from($base),
            &[$($crate::Value::from($override)),*],
        )
    };
}
