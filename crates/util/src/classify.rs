//! Classification of values into the four shapes the merger dispatches on.

use crate::value::Value;

/// How a value takes part in a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Plain key/value mapping, merged field by field.
    Map,
    /// Ordered list, merged by union.
    Sequence,
    /// String, number, boolean, null or undefined.
    Scalar,
    /// Date, regular expression or custom-typed instance. Never decomposed.
    Special,
}

/// Classifies a value.
///
/// # Examples
///
/// ```
/// use merge_deep_util::{classify, Kind, Value};
///
/// assert_eq!(classify(&Value::map()), Kind::Map);
/// assert_eq!(classify(&Value::Array(vec![])), Kind::Sequence);
/// assert_eq!(classify(&Value::Null), Kind::Scalar);
/// ```
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Map(_) => Kind::Map,
        Value::Array(_) => Kind::Sequence,
        Value::Date(_) | Value::RegExp(_) | Value::Instance(_) => Kind::Special,
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Kind::Scalar
        }
    }
}

/// Returns `true` only for plain key/value mappings.
///
/// Arrays, scalars, dates, regular expressions and custom-typed instances
/// are not plain objects, even when an instance wraps a map internally.
pub fn is_plain_object(value: &Value) -> bool {
    classify(value) == Kind::Map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Opaque, RegExp};
    use chrono::{TimeZone, Utc};
    use std::any::Any;

    #[derive(Debug)]
    struct Custom;

    impl Opaque for Custom {
        fn type_name(&self) -> &str {
            "Custom"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_scalars() {
        for value in [
            Value::Undefined,
            Value::Null,
            Value::from(false),
            Value::from(1.5),
            Value::from("s"),
        ] {
            assert_eq!(classify(&value), Kind::Scalar, "{value:?}");
            assert!(!is_plain_object(&value));
        }
    }

    #[test]
    fn test_special() {
        let date = Value::Date(Utc.timestamp_opt(0, 0).unwrap());
        let re = Value::RegExp(RegExp::new("a", "g").unwrap());
        let custom = Value::instance(Custom);
        for value in [date, re, custom] {
            assert_eq!(classify(&value), Kind::Special);
            assert!(!is_plain_object(&value));
        }
    }

    #[test]
    fn test_map_and_sequence() {
        assert!(is_plain_object(&Value::map()));
        assert!(!is_plain_object(&Value::Array(vec![Value::map()])));
        assert_eq!(Value::Array(vec![]).kind(), Kind::Sequence);
    }
}
