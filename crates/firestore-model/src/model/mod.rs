//! Data model types.
//!
//! This module contains the value tree and the types used to address it:
//! - Values (the closed union of field types)
//! - Timestamps, geo points and database identifiers
//! - Server timestamp placeholders
//! - Field paths and field masks
//! - Object values (path-addressed document mutation)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod field_mask;
pub mod field_path;
pub mod id;
pub mod object_value;
pub mod server_timestamp;
pub mod timestamp;
pub mod value;

pub use builder::{ArrayBuilder, MapBuilder};
pub use field_mask::FieldMask;
pub use field_path::FieldPath;
pub use id::{
    format_document_path, format_resource_name, parse_document_path, parse_resource_name,
    DatabaseId, DEFAULT_DATABASE_ID,
};
pub use object_value::ObjectValue;
pub use server_timestamp::{is_server_timestamp, local_write_time, previous_value, server_timestamp};
pub use timestamp::Timestamp;
pub use value::{array_contains, sorted_entries, GeoPoint, MapValue, TypeOrder, Value};
