//! Value types stored in documents.
//!
//! A [`Value`] is a closed tagged union over every type a document field can
//! hold. Composite values own their children directly, so cloning a value is
//! always a deep copy and two values never share mutable storage.
//!
//! `Value` implements `PartialEq`/`Eq` with server equality semantics (see
//! [`crate::compare::values_equal`]) but deliberately not `Ord`: ordering is a
//! separate relation, available through [`crate::compare::compare`].

use rustc_hash::FxHashMap;

use crate::model::id::{parse_document_path, DatabaseId};
use crate::model::server_timestamp::is_server_timestamp;
use crate::model::Timestamp;

/// Field storage of a map value.
///
/// Entries are logically unordered; use [`sorted_entries`] when a canonical
/// key order is needed.
pub type MapValue = FxHashMap<String, Value>;

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to +90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to +180).
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Type classes in ascending sort order.
///
/// Values of different type classes order by this enum's declaration order;
/// integers and doubles share [`TypeOrder::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeOrder {
    Null,
    Boolean,
    Number,
    Timestamp,
    ServerTimestamp,
    String,
    Bytes,
    Reference,
    GeoPoint,
    Array,
    Map,
}

/// A single typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Timestamp(Timestamp),
    /// UTF-8 text; may contain embedded NUL characters.
    String(String),
    Bytes(Vec<u8>),
    /// A reference to another document, stored by value.
    Reference {
        database: DatabaseId,
        /// Document path segments, e.g. `["coll", "doc"]`.
        path: Vec<String>,
    },
    GeoPoint(GeoPoint),
    Array(Vec<Value>),
    Map(MapValue),
}

impl Value {
    /// Creates an empty map value.
    pub fn empty_map() -> Self {
        Value::Map(MapValue::default())
    }

    /// Creates a reference from a slash-separated document path.
    pub fn reference(database: DatabaseId, path: &str) -> Self {
        Value::Reference {
            database,
            path: parse_document_path(path),
        }
    }

    /// Returns the type class used as the primary ordering key.
    ///
    /// A map carrying the server timestamp sentinel keys reports
    /// [`TypeOrder::ServerTimestamp`] rather than [`TypeOrder::Map`].
    pub fn type_order(&self) -> TypeOrder {
        match self {
            Value::Null => TypeOrder::Null,
            Value::Boolean(_) => TypeOrder::Boolean,
            Value::Integer(_) | Value::Double(_) => TypeOrder::Number,
            Value::Timestamp(_) => TypeOrder::Timestamp,
            Value::String(_) => TypeOrder::String,
            Value::Bytes(_) => TypeOrder::Bytes,
            Value::Reference { .. } => TypeOrder::Reference,
            Value::GeoPoint(_) => TypeOrder::GeoPoint,
            Value::Array(_) => TypeOrder::Array,
            Value::Map(_) if is_server_timestamp(self) => TypeOrder::ServerTimestamp,
            Value::Map(_) => TypeOrder::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Double(_))
    }

    /// Returns true for a double holding any NaN bit pattern.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Double(d) if d.is_nan())
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true for any map-tagged value, including server timestamp
    /// placeholders.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut MapValue> {
        match self {
            Value::Map(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Returns the entries of `map` sorted by key (byte-wise).
pub fn sorted_entries(map: &MapValue) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    entries
}

/// Returns true if `array` contains an element equal to `value`.
///
/// Uses value equality, so `Integer(1)` does not match `Double(1.0)` but any
/// NaN matches any other NaN.
pub fn array_contains(array: &[Value], value: &Value) -> bool {
    array.iter().any(|element| element == value)
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl From<GeoPoint> for Value {
    fn from(v: GeoPoint) -> Self {
        Value::GeoPoint(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<MapValue> for Value {
    fn from(v: MapValue) -> Self {
        Value::Map(v)
    }
}
