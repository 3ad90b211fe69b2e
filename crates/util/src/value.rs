//! The dynamic value model that flows through cloning and merging.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};

use crate::classify::Kind;
use crate::error::ValueError;

/// Insertion-ordered key/value mapping. Keys are unique; order is not part
/// of equality.
pub type Map = IndexMap<String, Value>;

/// A dynamically typed value.
///
/// `Map` is the only variant eligible for field-by-field merging. `Date`,
/// `RegExp` and `Instance` carry runtime-type identity and are always treated
/// as whole units.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Map(Map),
    Date(DateTime<Utc>),
    RegExp(RegExp),
    /// A custom-typed object. Cloning shares the reference.
    Instance(Instance),
}

impl Value {
    /// An empty map value.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    /// Wraps a custom-typed object.
    pub fn instance<T: Opaque>(object: T) -> Self {
        Value::Instance(Instance::new(object))
    }

    pub fn kind(&self) -> Kind {
        crate::classify::classify(self)
    }

    /// Short lowercase name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "object",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
            Value::Instance(_) => "instance",
        }
    }

    /// `true` for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Looks up an own key. Returns `None` for non-maps.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::json_equal::deep_equal(self, other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(at: DateTime<Utc>) -> Self {
        Value::Date(at)
    }
}

impl From<RegExp> for Value {
    fn from(re: RegExp) -> Self {
        Value::RegExp(re)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

/// Flags accepted by [`RegExp::new`], in canonical order.
const REGEXP_FLAGS: &str = "gimsuy";

/// A compiled regular expression that remembers its source and flags.
///
/// `i`, `m` and `s` change matching; `g`, `u` and `y` are carried along
/// so the value survives a clone unchanged.
#[derive(Clone)]
pub struct RegExp {
    source: String,
    flags: String,
    regex: Regex,
}

impl RegExp {
    /// Compiles `source` with the given flags.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown or repeated flag, or a pattern the
    /// regex engine rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_deep_util::RegExp;
    ///
    /// let re = RegExp::new("te.t", "gi").unwrap();
    /// assert!(re.is_match("TEST"));
    /// assert_eq!(re.to_string(), "/te.t/gi");
    /// assert!(RegExp::new("x", "q").is_err());
    /// ```
    pub fn new(source: &str, flags: &str) -> Result<Self, ValueError> {
        let mut builder = RegexBuilder::new(source);
        let mut seen: Vec<char> = Vec::with_capacity(flags.len());
        for flag in flags.chars() {
            if seen.contains(&flag) {
                return Err(ValueError::DuplicateFlag(flag));
            }
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'g' | 'u' | 'y' => {}
                other => return Err(ValueError::InvalidFlag(other)),
            }
            seen.push(flag);
        }
        let regex = builder.build().map_err(|err| ValueError::InvalidPattern {
            pattern: source.to_string(),
            reason: err.to_string(),
        })?;
        let flags = REGEXP_FLAGS.chars().filter(|f| seen.contains(f)).collect();
        Ok(Self {
            source: source.to_string(),
            flags,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for RegExp {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A custom-typed object whose shape the merger does not look into.
///
/// Implementors only need a type name and `as_any`. Override `opaque_eq`
/// when two distinct instances should compare equal.
pub trait Opaque: fmt::Debug + Send + Sync + 'static {
    fn type_name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn opaque_eq(&self, other: &dyn Opaque) -> bool {
        let _ = other;
        false
    }
}

/// Shared handle to an [`Opaque`] object.
#[derive(Clone)]
pub struct Instance(Arc<dyn Opaque>);

impl Instance {
    pub fn new<T: Opaque>(object: T) -> Self {
        Self(Arc::new(object))
    }

    pub fn from_arc(object: Arc<dyn Opaque>) -> Self {
        Self(object)
    }

    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    pub fn downcast_ref<T: Opaque>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Identity, or same type name and `opaque_eq`.
    pub fn same_as(&self, other: &Instance) -> bool {
        self.ptr_eq(other)
            || (self.type_name() == other.type_name() && self.0.opaque_eq(&*other.0))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Opaque for Point {
        fn type_name(&self) -> &str {
            "Point"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn opaque_eq(&self, other: &dyn Opaque) -> bool {
            other.as_any().downcast_ref::<Point>() == Some(self)
        }
    }

    #[test]
    fn test_regexp_flags_are_canonical() {
        let re = RegExp::new("a+", "yig").unwrap();
        assert_eq!(re.flags(), "giy");
        assert_eq!(re.source(), "a+");
        assert!(re.is_match("AAA"));
    }

    #[test]
    fn test_regexp_rejects_bad_flags() {
        assert_eq!(RegExp::new("a", "x").unwrap_err(), ValueError::InvalidFlag('x'));
        assert_eq!(RegExp::new("a", "gg").unwrap_err(), ValueError::DuplicateFlag('g'));
    }

    #[test]
    fn test_regexp_rejects_bad_pattern() {
        let err = RegExp::new("(", "").unwrap_err();
        assert!(matches!(err, ValueError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_regexp_multiline_and_dotall() {
        assert!(RegExp::new("^b$", "m").unwrap().is_match("a\nb"));
        assert!(!RegExp::new("^b$", "").unwrap().is_match("a\nb"));
        assert!(RegExp::new("a.b", "s").unwrap().is_match("a\nb"));
    }

    #[test]
    fn test_instance_identity_and_equality() {
        let a = Instance::new(Point { x: 1, y: 2 });
        let b = a.clone();
        let c = Instance::new(Point { x: 1, y: 2 });
        let d = Instance::new(Point { x: 3, y: 4 });

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert!(a.same_as(&c));
        assert!(!a.same_as(&d));
        assert_eq!(a.downcast_ref::<Point>(), Some(&Point { x: 1, y: 2 }));
        assert_eq!(a.type_name(), "Point");
    }

    #[test]
    fn test_regexp_exposes_compiled_regex() {
        let re = RegExp::new("(\\d+)-(\\d+)", "").unwrap();
        let caps = re.as_regex().captures("10-20").unwrap();
        assert_eq!(&caps[1], "10");
        assert_eq!(&caps[2], "20");
    }

    #[test]
    fn test_instance_from_shared_arc() {
        let shared: Arc<dyn Opaque> = Arc::new(Point { x: 5, y: 6 });
        let a = Instance::from_arc(Arc::clone(&shared));
        let b = Instance::from_arc(shared);
        assert!(a.ptr_eq(&b));
        assert_eq!(b.downcast_ref::<Point>(), Some(&Point { x: 5, y: 6 }));
    }

    #[test]
    fn test_value_accessors() {
        let value: Value = vec![("a", Value::from(1)), ("b", Value::from("x"))]
            .into_iter()
            .collect();
        assert!(value.is_map());
        assert_eq!(value.get("a").and_then(Value::as_f64), Some(1.0));
        assert_eq!(value.get("b").and_then(Value::as_str), Some("x"));
        assert_eq!(value.get("c"), None);
        assert_eq!(Value::from(true).get("a"), None);
        assert_eq!(value.type_name(), "object");
        assert!(Value::Undefined.is_nullish());
        assert!(Value::Null.is_nullish());
        assert!(!Value::from(0).is_nullish());
    }
}
