//! Conversion between [`Value`] and `serde_json::Value`.

use chrono::SecondsFormat;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::error::ValueError;
use crate::value::{Map, Value};

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            JsonValue::Object(obj) => {
                let mut new_obj = Map::with_capacity(obj.len());
                for (key, val) in obj {
                    new_obj.insert(key.clone(), Value::from(val));
                }
                Value::Map(new_obj)
            }
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        Value::from(&value)
    }
}

/// Converts a value to JSON.
///
/// Integral numbers become JSON integers; `NaN` and infinities become
/// `null`. Dates become RFC 3339 strings with millisecond precision.
/// `Undefined` map entries are omitted and `Undefined` array items become
/// `null`.
///
/// # Errors
///
/// Returns [`ValueError::NotRepresentable`] for a top-level `Undefined`, or
/// for any regular expression or custom-typed instance in the tree.
///
/// # Examples
///
/// ```
/// use merge_deep_util::{to_json, Value};
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": [1, 2.5]}));
/// assert_eq!(to_json(&value).unwrap(), json!({"a": [1, 2.5]}));
/// assert!(to_json(&Value::Undefined).is_err());
/// ```
pub fn to_json(value: &Value) -> Result<JsonValue, ValueError> {
    match value {
        Value::Undefined => Err(ValueError::NotRepresentable("undefined")),
        other => to_json_inner(other),
    }
}

fn to_json_inner(value: &Value) -> Result<JsonValue, ValueError> {
    Ok(match value {
        Value::Undefined | Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(to_json_inner)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Map(obj) => {
            let mut new_obj = JsonMap::with_capacity(obj.len());
            for (key, val) in obj {
                if matches!(val, Value::Undefined) {
                    continue;
                }
                new_obj.insert(key.clone(), to_json_inner(val)?);
            }
            JsonValue::Object(new_obj)
        }
        Value::Date(at) => JsonValue::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Value::RegExp(_) => return Err(ValueError::NotRepresentable("regexp")),
        Value::Instance(_) => return Err(ValueError::NotRepresentable("instance")),
    })
}

fn number_to_json(n: f64) -> JsonValue {
    if !n.is_finite() {
        return JsonValue::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return JsonValue::from(n as i64);
    }
    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}
