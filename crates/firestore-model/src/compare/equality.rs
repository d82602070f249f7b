//! Value equality.
//!
//! Equality is stricter than ordering for numbers: `-0.0 != 0.0` and
//! `Integer(1) != Double(1.0)`, though both pairs compare `Equal`. Every NaN
//! is equal to every other NaN, which keeps the relation reflexive.

use crate::model::server_timestamp::{is_server_timestamp, local_write_time};
use crate::model::{MapValue, Value};
use crate::util::canonical_double_bits;

/// Returns true if the two values are equal under server equality.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Double(a), Value::Double(b)) => {
            canonical_double_bits(*a) == canonical_double_bits(*b)
        }
        (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bytes(a), Value::Bytes(b)) => a == b,
        (
            Value::Reference {
                database: left_db,
                path: left_path,
            },
            Value::Reference {
                database: right_db,
                path: right_path,
            },
        ) => left_db == right_db && left_path == right_path,
        (Value::GeoPoint(a), Value::GeoPoint(b)) => {
            canonical_double_bits(a.latitude) == canonical_double_bits(b.latitude)
                && canonical_double_bits(a.longitude) == canonical_double_bits(b.longitude)
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(l, r)| values_equal(l, r))
        }
        (Value::Map(a), Value::Map(b)) => {
            match (is_server_timestamp(left), is_server_timestamp(right)) {
                (true, true) => local_write_time(left) == local_write_time(right),
                (false, false) => maps_equal(a, b),
                _ => false,
            }
        }
        _ => false,
    }
}

fn maps_equal(left: &MapValue, right: &MapValue) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, lv)| right.get(key).is_some_and(|rv| values_equal(lv, rv)))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other)
    }
}

impl Eq for Value {}
