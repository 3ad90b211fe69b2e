use crate::value::Value;

/// Performs a deep equality check between two values.
///
/// - Numbers compare with IEEE semantics, so `NaN` never equals itself.
/// - Maps compare key sets and values; insertion order is ignored.
/// - Dates compare by instant, regular expressions by source and flags.
/// - Instances are equal when they are the same reference or their
///   [`Opaque::opaque_eq`](crate::Opaque::opaque_eq) says so.
/// - `Undefined` and `Null` are distinct.
///
/// # Examples
///
/// ```
/// use merge_deep_util::{deep_equal, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"foo": [1, 2, 3]}));
/// let b = Value::from(json!({"foo": [1, 2, 3]}));
/// let c = Value::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Map(obj_a), Value::Map(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        (Value::Date(a), Value::Date(b)) => a == b,
        (Value::RegExp(a), Value::RegExp(b)) => a == b,
        (Value::Instance(a), Value::Instance(b)) => a.same_as(b),

        // Different types are never equal
        _ => false,
    }
}

/// Returns `true` if any element of `items` deep-equals `needle`.
pub fn contains_deep(items: &[Value], needle: &Value) -> bool {
    items.iter().any(|item| deep_equal(item, needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Opaque, RegExp};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::any::Any;

    fn v(value: serde_json::Value) -> Value {
        Value::from(value)
    }

    #[derive(Debug)]
    struct Token;

    impl Opaque for Token {
        fn type_name(&self) -> &str {
            "Token"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_scalars() {
        assert!(deep_equal(&v(json!(1)), &v(json!(1))));
        assert!(!deep_equal(&v(json!(1)), &v(json!(2))));
        assert!(!deep_equal(&v(json!(1)), &v(json!(true))));
        assert!(!deep_equal(&v(json!(0)), &v(json!(null))));
        assert!(!deep_equal(&v(json!("")), &v(json!(null))));
        assert!(deep_equal(&v(json!("a")), &v(json!("a"))));
    }

    #[test]
    fn test_integer_and_float_forms_are_equal() {
        assert!(deep_equal(&v(json!(1)), &v(json!(1.0))));
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        assert!(!deep_equal(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    }

    #[test]
    fn test_undefined_is_not_null() {
        assert!(!deep_equal(&Value::Undefined, &Value::Null));
        assert!(deep_equal(&Value::Undefined, &Value::Undefined));
    }

    #[test]
    fn test_objects_ignore_order() {
        assert!(deep_equal(
            &v(json!({"a": 1, "b": "2"})),
            &v(json!({"b": "2", "a": 1}))
        ));
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2"})),
            &v(json!({"a": 1, "b": "2", "c": []}))
        ));
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2", "c": 3})),
            &v(json!({"a": 1, "b": "2", "d": 3}))
        ));
    }

    #[test]
    fn test_arrays() {
        assert!(deep_equal(&v(json!([])), &v(json!([]))));
        assert!(deep_equal(&v(json!([[1], {"a": 2}])), &v(json!([[1], {"a": 2}]))));
        assert!(!deep_equal(&v(json!([1, 2, 3])), &v(json!([1, 2]))));
        assert!(!deep_equal(&v(json!([1, 2])), &v(json!([2, 1]))));
        assert!(!deep_equal(&v(json!({})), &v(json!([]))));
    }

    #[test]
    fn test_dates() {
        let a = Utc.timestamp_opt(1_000, 0).unwrap();
        let b = Utc.timestamp_opt(2_000, 0).unwrap();
        assert!(deep_equal(&Value::Date(a), &Value::Date(a)));
        assert!(!deep_equal(&Value::Date(a), &Value::Date(b)));
    }

    #[test]
    fn test_regexps() {
        let a = Value::RegExp(RegExp::new("x", "g").unwrap());
        let b = Value::RegExp(RegExp::new("x", "g").unwrap());
        let c = Value::RegExp(RegExp::new("x", "i").unwrap());
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
        assert!(!deep_equal(&a, &v(json!("/x/g"))));
    }

    #[test]
    fn test_instances_compare_by_reference_by_default() {
        let a = Value::instance(Token);
        let b = Value::instance(Token);
        assert!(deep_equal(&a, &a.clone()));
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_contains_deep() {
        let items = vec![v(json!("foo")), v(json!([3, 4])), v(json!({"a": 1}))];
        assert!(contains_deep(&items, &v(json!([3, 4]))));
        assert!(contains_deep(&items, &v(json!({"a": 1}))));
        assert!(!contains_deep(&items, &v(json!("bar"))));
        assert!(!contains_deep(&[], &v(json!("foo"))));
    }
}
