//! The recursive merge algorithm.

use merge_deep_util::{clone_filtered, contains_deep, has_own_property, Kind, Map, Value};
use tracing::{debug, trace};

use crate::options::{ArrayMerge, MergeOptions};

/// What to do with a key present in both the accumulator and an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Merge the two maps field by field.
    Recurse,
    /// Append the incoming item(s) to the existing array, skipping
    /// deep-equal duplicates.
    Union,
    /// Replace the existing value with a clone of the incoming one.
    Overwrite,
}

/// Decision table for a key present on both sides.
pub(crate) fn decide(arrays: ArrayMerge, current: Kind, incoming: Kind) -> Action {
    match (current, incoming, arrays) {
        (Kind::Map, Kind::Map, _) => Action::Recurse,
        (Kind::Sequence, Kind::Sequence | Kind::Scalar | Kind::Special, ArrayMerge::Union) => {
            Action::Union
        }
        _ => Action::Overwrite,
    }
}

/// Folds override values into a clone of a base value.
///
/// Inputs are only ever read. The result owns every map and array it
/// contains.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Merges a single override into `base`.
    pub fn merge(&self, base: &Value, override_: &Value) -> Value {
        self.merge_all(base, std::slice::from_ref(override_))
    }

    /// Merges `overrides` into `base`, left to right.
    ///
    /// With no overrides the result is a deep clone of `base`, whatever its
    /// kind. Otherwise a `base` that is not a map starts the fold as an
    /// empty map. An array override contributes its items under their
    /// indices (`"0"`, `"1"`, ...); scalar and special overrides contribute
    /// nothing.
    pub fn merge_all(&self, base: &Value, overrides: &[Value]) -> Value {
        if overrides.is_empty() {
            return self.clone_value(base);
        }

        let mut acc = match base {
            Value::Map(map) => self.clone_map(map),
            other => {
                debug!(kind = other.type_name(), "base is not a map, starting from an empty map");
                Map::new()
            }
        };

        for (index, override_) in overrides.iter().enumerate() {
            match override_ {
                Value::Map(obj) => self.fold(&mut acc, obj),
                Value::Array(items) => {
                    for (i, item) in items.iter().enumerate() {
                        self.fold_entry(&mut acc, &i.to_string(), item);
                    }
                }
                other => {
                    debug!(index, kind = other.type_name(), "skipping override that is not a map");
                }
            }
        }

        Value::Map(acc)
    }

    fn fold(&self, acc: &mut Map, obj: &Map) {
        for (key, val) in obj {
            self.fold_entry(acc, key, val);
        }
    }

    fn fold_entry(&self, acc: &mut Map, key: &str, val: &Value) {
        if self.options.is_reserved(key) {
            debug!(key = %key, "skipping reserved key");
            return;
        }
        if !has_own_property(acc, key) {
            acc.insert(key.to_string(), self.clone_value(val));
            return;
        }
        if let Some(current) = acc.get_mut(key) {
            self.combine(current, val);
        }
    }

    fn combine(&self, current: &mut Value, incoming: &Value) {
        match decide(self.options.arrays, current.kind(), incoming.kind()) {
            Action::Recurse => {
                if let (Value::Map(cur), Value::Map(inc)) = (current, incoming) {
                    self.fold(cur, inc);
                }
            }
            Action::Union => {
                if let Value::Array(items) = current {
                    match incoming {
                        Value::Array(inc) => self.union(items, inc),
                        single => self.union(items, std::slice::from_ref(single)),
                    }
                }
            }
            Action::Overwrite => *current = self.clone_value(incoming),
        }
    }

    fn union(&self, items: &mut Vec<Value>, incoming: &[Value]) {
        let before = items.len();
        for item in incoming {
            let item = self.clone_value(item);
            if !contains_deep(items, &item) {
                items.push(item);
            }
        }
        trace!(
            appended = items.len() - before,
            duplicates = incoming.len() - (items.len() - before),
            "array union"
        );
    }

    fn clone_value(&self, value: &Value) -> Value {
        clone_filtered(value, &|key: &str| self.options.is_reserved(key))
    }

    fn clone_map(&self, map: &Map) -> Map {
        map.iter()
            .filter(|(key, _)| !self.options.is_reserved(key))
            .map(|(key, val)| (key.clone(), self.clone_value(val)))
            .collect()
    }
}
