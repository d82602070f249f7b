//! Path-addressed mutation of map-shaped documents.
//!
//! An [`ObjectValue`] exclusively owns the root map of one document. Reads
//! and writes are addressed by [`FieldPath`]; traversal irregularities are
//! never errors:
//!
//! - `set` creates missing intermediate maps and replaces any non-map value
//!   standing where a map is needed;
//! - `delete` on a path that does not resolve changes nothing;
//! - neither operation prunes maps that end up empty.
//!
//! This makes re-applying a mutation idempotent.
//!
//! ```rust
//! use firestore_model::{FieldPath, ObjectValue, Value};
//!
//! let mut doc = ObjectValue::new();
//! let path = FieldPath::parse("a.b")?;
//! doc.set(&path, Value::Integer(1));
//! assert_eq!(doc.get(&path), Some(&Value::Integer(1)));
//!
//! doc.delete(&path);
//! assert_eq!(doc.get(&FieldPath::parse("a")?), Some(&Value::empty_map()));
//! assert!(doc.to_field_mask().is_empty());
//! # Ok::<(), firestore_model::InvalidPathError>(())
//! ```

use std::fmt;

use tracing::trace;

use crate::error::InvalidRootError;
use crate::model::server_timestamp::is_server_timestamp;
use crate::model::{FieldMask, FieldPath, MapValue, Value};

/// A document's root map plus its path-addressed mutation API.
///
/// `ObjectValue` is move-only: it does not implement `Clone`. Use
/// [`ObjectValue::deep_clone`] when an independent copy is needed.
#[derive(Debug)]
pub struct ObjectValue {
    /// Always a `Value::Map`.
    root: Value,
}

impl ObjectValue {
    /// Creates an object with no fields.
    pub fn new() -> Self {
        Self {
            root: Value::empty_map(),
        }
    }

    /// Creates an object owning `fields`.
    pub fn from_map(fields: MapValue) -> Self {
        Self {
            root: Value::Map(fields),
        }
    }

    /// Takes ownership of a decoded root value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a map. Use `ObjectValue::try_from` when the
    /// root type depends on input data.
    pub fn from_value(value: Value) -> Self {
        assert!(
            value.is_map(),
            "ObjectValue must be backed by a map value, found {:?}",
            value.type_order()
        );
        Self { root: value }
    }

    /// Returns the root map value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consumes the object and returns the root map value.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Returns the top-level fields.
    pub fn fields(&self) -> &MapValue {
        match &self.root {
            Value::Map(fields) => fields,
            _ => unreachable!("ObjectValue root is always a map"),
        }
    }

    fn fields_mut(&mut self) -> &mut MapValue {
        match &mut self.root {
            Value::Map(fields) => fields,
            _ => unreachable!("ObjectValue root is always a map"),
        }
    }

    /// Returns an independent copy of this object.
    pub fn deep_clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    /// Returns the value at `path`, or `None` if it does not exist.
    ///
    /// The empty path returns the root map. Any missing or non-map
    /// intermediate yields `None`. Clone the result to take ownership.
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Sets the field at `path` to `value`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    pub fn set(&mut self, path: &FieldPath, value: Value) {
        let Some((last, parents)) = path.segments().split_last() else {
            panic!("cannot set field for empty path on ObjectValue");
        };
        self.parent_map(parents).insert(last.clone(), value);
    }

    /// Removes the field at `path`. Does nothing if the path does not resolve.
    ///
    /// Ancestor maps left empty by the removal are kept.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    pub fn delete(&mut self, path: &FieldPath) {
        let Some((last, parents)) = path.segments().split_last() else {
            panic!("cannot delete field for empty path on ObjectValue");
        };

        let mut current = self.fields_mut();
        for segment in parents {
            match current.get_mut(segment) {
                Some(Value::Map(next)) => current = next,
                _ => {
                    trace!(path = %path, "delete target does not resolve; ignoring");
                    return;
                }
            }
        }

        if current.remove(last).is_none() {
            trace!(path = %path, "delete target already absent");
        }
    }

    /// Copies the fields named by `mask` from `data` into this object.
    ///
    /// Each path present in `data` is set; each path absent from `data` is
    /// deleted. Paths are applied in [`FieldPath`] order, and every path has
    /// the same effect as a standalone `set` or `delete`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` contains the empty path.
    pub fn set_all(&mut self, mask: &FieldMask, data: &ObjectValue) {
        for path in mask {
            match data.get(path) {
                Some(value) => {
                    trace!(path = %path, "set_all: upsert");
                    self.set(path, value.clone());
                }
                None => {
                    trace!(path = %path, "set_all: delete");
                    self.delete(path);
                }
            }
        }
    }

    /// Returns every leaf field and its path, in path order.
    ///
    /// Nested maps are descended into and not listed themselves; an empty map
    /// therefore contributes nothing. Server timestamp placeholders are leaves.
    pub fn leaves(&self) -> Vec<(FieldPath, &Value)> {
        let mut leaves = Vec::new();
        collect_leaves(self.fields(), &FieldPath::empty(), &mut leaves);
        leaves.sort_by(|a, b| a.0.cmp(&b.0));
        leaves
    }

    /// Returns the mask of every leaf field currently present.
    pub fn to_field_mask(&self) -> FieldMask {
        self.leaves().into_iter().map(|(path, _)| path).collect()
    }

    /// Returns the map that holds the final segment of a path whose
    /// non-terminal segments are `parents`, creating maps along the way.
    fn parent_map(&mut self, parents: &[String]) -> &mut MapValue {
        let mut current = self.fields_mut();
        for segment in parents {
            let entry = current
                .entry(segment.clone())
                .or_insert_with(Value::empty_map);
            if !entry.is_map() {
                trace!(
                    segment = %segment,
                    replaced = ?entry.type_order(),
                    "overwriting non-map intermediate value with an empty map"
                );
                *entry = Value::empty_map();
            }
            current = match entry {
                Value::Map(next) => next,
                _ => unreachable!("intermediate value was just made a map"),
            };
        }
        current
    }
}

fn collect_leaves<'a>(
    fields: &'a MapValue,
    prefix: &FieldPath,
    leaves: &mut Vec<(FieldPath, &'a Value)>,
) {
    for (key, value) in fields {
        let path = prefix.append(key.as_str());
        match value {
            Value::Map(nested) if !is_server_timestamp(value) => {
                collect_leaves(nested, &path, leaves);
            }
            _ => leaves.push((path, value)),
        }
    }
}

impl Default for ObjectValue {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Value> for ObjectValue {
    type Error = InvalidRootError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if value.is_map() {
            Ok(Self { root: value })
        } else {
            Err(InvalidRootError {
                found: value.type_order(),
            })
        }
    }
}

impl From<MapValue> for ObjectValue {
    fn from(fields: MapValue) -> Self {
        Self::from_map(fields)
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for ObjectValue {}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectValue({})", self.root)
    }
}
