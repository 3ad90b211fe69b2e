use crate::value::{Map, Value};

/// Check if a map has an own property with the given key.
///
/// A [`Map`] has no inherited entries, so every stored key is own.
///
/// # Examples
///
/// ```
/// use merge_deep_util::{has_own_property, Map, Value};
///
/// let mut map = Map::new();
/// map.insert("foo".to_string(), Value::from(1));
///
/// assert!(has_own_property(&map, "foo"));
/// assert!(!has_own_property(&map, "bar"));
/// ```
pub fn has_own_property(obj: &Map, key: &str) -> bool {
    obj.contains_key(key)
}

/// Check if a value is a map with an own property `key`.
/// Returns false if the value is not a map.
pub fn has_own_property_value(obj: &Value, key: &str) -> bool {
    match obj {
        Value::Map(map) => map.contains_key(key),
        _ => false,
    }
}
