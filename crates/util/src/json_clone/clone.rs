use tracing::trace;

use crate::reserved_key::is_reserved_key;
use crate::value::{Map, Value};

/// Creates a deep clone of any value.
///
/// Every nested map and array in the result is a new allocation. Keys
/// listed in [`RESERVED_KEYS`](crate::RESERVED_KEYS) are dropped.
///
/// # Examples
///
/// ```
/// use merge_deep_util::{clone, Value};
///
/// let original: Value = serde_json::json!({"foo": [1, 2, 3]}).into();
/// let cloned = clone(&original);
///
/// assert_eq!(original, cloned);
/// ```
pub fn clone(value: &Value) -> Value {
    clone_filtered(value, &is_reserved_key)
}

/// Creates a deep clone, dropping every map key for which `skip` returns
/// `true`.
pub fn clone_filtered<F>(value: &Value, skip: &F) -> Value
where
    F: Fn(&str) -> bool + ?Sized,
{
    match value {
        Value::Undefined => Value::Undefined,
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(*n),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => Value::Array(items.iter().map(|item| clone_filtered(item, skip)).collect()),
        Value::Map(obj) => {
            let mut new_obj = Map::with_capacity(obj.len());
            for (key, val) in obj {
                if skip(key) {
                    trace!(key = %key, "skipping reserved key while cloning");
                    continue;
                }
                new_obj.insert(key.clone(), clone_filtered(val, skip));
            }
            Value::Map(new_obj)
        }
        Value::Date(at) => Value::Date(*at),
        Value::RegExp(re) => Value::RegExp(re.clone()),
        Value::Instance(instance) => Value::Instance(instance.clone()),
    }
}
