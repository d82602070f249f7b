//! Builder API for ergonomic value construction.
//!
//! Provides a fluent interface for building nested maps and arrays.
//!
//! # Example
//!
//! ```rust
//! use firestore_model::model::builder::MapBuilder;
//! use firestore_model::{FieldPath, Timestamp, Value};
//!
//! let doc = MapBuilder::new()
//!     .string("name", "Alice")
//!     .integer("age", 30)
//!     .map("address", |a| a
//!         .string("city", "Lisbon")
//!         .geo_point("location", 38.72, -9.14)
//!     )
//!     .array("tags", |t| t.push("admin").push(1))
//!     .server_timestamp("updated", Timestamp::new(1_700_000_000, 0))
//!     .build_object();
//!
//! let city = FieldPath::parse("address.city").unwrap();
//! assert_eq!(doc.get(&city), Some(&Value::from("Lisbon")));
//! ```

use crate::model::server_timestamp::server_timestamp;
use crate::model::{DatabaseId, GeoPoint, MapValue, ObjectValue, Timestamp, Value};

/// Builder for constructing a map value.
///
/// Setting the same key twice keeps the later value.
#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    fields: MapValue,
}

impl MapBuilder {
    /// Creates a new empty MapBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to any value.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    /// Sets a null field.
    pub fn null(self, key: impl Into<String>) -> Self {
        self.field(key, Value::Null)
    }

    /// Sets a boolean field.
    pub fn boolean(self, key: impl Into<String>, value: bool) -> Self {
        self.field(key, Value::Boolean(value))
    }

    /// Sets an integer field.
    pub fn integer(self, key: impl Into<String>, value: i64) -> Self {
        self.field(key, Value::Integer(value))
    }

    /// Sets a double field.
    pub fn double(self, key: impl Into<String>, value: f64) -> Self {
        self.field(key, Value::Double(value))
    }

    /// Sets a string field.
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(key, Value::String(value.into()))
    }

    /// Sets a bytes field.
    pub fn bytes(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.field(key, Value::Bytes(value.into()))
    }

    /// Sets a timestamp field.
    pub fn timestamp(self, key: impl Into<String>, value: Timestamp) -> Self {
        self.field(key, Value::Timestamp(value))
    }

    /// Sets a geo point field.
    pub fn geo_point(self, key: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.field(key, Value::GeoPoint(GeoPoint::new(latitude, longitude)))
    }

    /// Sets a reference field from a slash-separated document path.
    pub fn reference(self, key: impl Into<String>, database: DatabaseId, path: &str) -> Self {
        self.field(key, Value::reference(database, path))
    }

    /// Sets a server timestamp placeholder with no previous value.
    pub fn server_timestamp(self, key: impl Into<String>, local_write_time: Timestamp) -> Self {
        self.field(key, server_timestamp(local_write_time, None))
    }

    // =========================================================================
    // Composites
    // =========================================================================

    /// Sets a nested map field using a builder function.
    pub fn map<F>(self, key: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(MapBuilder) -> MapBuilder,
    {
        let nested = f(MapBuilder::new());
        self.field(key, nested.build())
    }

    /// Sets an array field using a builder function.
    pub fn array<F>(self, key: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(ArrayBuilder) -> ArrayBuilder,
    {
        let nested = f(ArrayBuilder::new());
        self.field(key, nested.build())
    }

    /// Returns the collected fields.
    pub fn build_fields(self) -> MapValue {
        self.fields
    }

    /// Builds a map value.
    pub fn build(self) -> Value {
        Value::Map(self.fields)
    }

    /// Builds a document root.
    pub fn build_object(self) -> ObjectValue {
        ObjectValue::from_map(self.fields)
    }
}

/// Builder for constructing an array value.
#[derive(Debug, Clone, Default)]
pub struct ArrayBuilder {
    values: Vec<Value>,
}

impl ArrayBuilder {
    /// Creates a new empty ArrayBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element.
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Appends every element of `values`.
    pub fn extend<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends a nested map using a builder function.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(MapBuilder) -> MapBuilder,
    {
        let nested = f(MapBuilder::new());
        self.push(nested.build())
    }

    /// Appends a nested array using a builder function.
    pub fn array<F>(self, f: F) -> Self
    where
        F: FnOnce(ArrayBuilder) -> ArrayBuilder,
    {
        let nested = f(ArrayBuilder::new());
        self.push(nested.build())
    }

    /// Builds an array value.
    pub fn build(self) -> Value {
        Value::Array(self.values)
    }
}
