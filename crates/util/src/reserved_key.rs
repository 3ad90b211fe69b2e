//! Keys that are never assigned into a cloned or merged map.

/// Names that denote an object's constructor or prototype linkage.
pub const RESERVED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Check whether `key` is one of [`RESERVED_KEYS`].
///
/// # Examples
///
/// ```
/// use merge_deep_util::is_reserved_key;
///
/// assert!(is_reserved_key("__proto__"));
/// assert!(!is_reserved_key("proto"));
/// ```
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
