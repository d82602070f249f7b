//! Document value model: typed values, field paths, path-addressed mutation
//! and server-compatible ordering.
//!
//! This crate provides the in-memory representation of document field values
//! together with the relations a client needs to agree with the server on:
//! total ordering, equality and canonical ids.
//!
//! # Overview
//!
//! - **Closed value union**: every field holds one [`Value`] variant; maps and
//!   arrays own their children, so copies never share storage
//! - **Two relations**: [`compare`] orders integers and doubles on one numeric
//!   axis while `==` keeps them apart
//! - **Forgiving mutation**: [`ObjectValue`] creates missing parents on set
//!   and treats unresolvable deletes as no-ops
//!
//! # Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//!
//! use firestore_model::{compare, FieldMask, FieldPath, ObjectValue, Value};
//!
//! let mut doc = ObjectValue::new();
//! doc.set(&FieldPath::parse("user.name")?, Value::from("Alice"));
//! doc.set(&FieldPath::parse("user.`first-login`")?, Value::Integer(1));
//!
//! assert_eq!(doc.to_string(), "ObjectValue({user:{first-login:1,name:Alice}})");
//!
//! let mask: FieldMask = doc.to_field_mask();
//! assert_eq!(mask.to_string(), "{user.`first-login`, user.name}");
//!
//! assert_eq!(compare(&Value::Integer(1), &Value::Double(1.0)), Ordering::Equal);
//! assert_ne!(Value::Integer(1), Value::Double(1.0));
//! # Ok::<(), firestore_model::InvalidPathError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Value, Timestamp, FieldPath, FieldMask, ObjectValue)
//! - [`compare`]: Ordering, equality and canonical ids
//! - [`validate`]: Semantic validation
//! - [`error`]: Error types
//! - [`limits`]: Validation limits
//! - [`util`]: Numeric and date-time helpers

pub mod compare;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use compare::{canonical_id, compare, deep_clone, values_equal};
pub use error::{InvalidPathError, InvalidRootError, ValidationError};
pub use model::{
    array_contains, is_server_timestamp, local_write_time, previous_value, server_timestamp,
    ArrayBuilder, DatabaseId, FieldMask, FieldPath, GeoPoint, MapBuilder, MapValue, ObjectValue,
    Timestamp, TypeOrder, Value,
};
pub use util::DateTimeParseError;
pub use validate::validate_value;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
