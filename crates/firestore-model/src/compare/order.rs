//! Total ordering over values.
//!
//! Values order first by [`TypeOrder`](crate::model::TypeOrder), then by
//! type-specific rules. This is the order the server uses for query results
//! and indexes, so it has to agree with it exactly.

use std::cmp::Ordering;

use crate::model::server_timestamp::{is_server_timestamp, local_write_time};
use crate::model::{sorted_entries, DatabaseId, GeoPoint, MapValue, Value};
use crate::util::{compare_doubles, compare_mixed};

/// Compares two values under the server's total order.
///
/// Integers and doubles share one numeric axis, so `Integer(1)` and
/// `Double(1.0)` compare `Equal` even though they are not `==`.
pub fn compare(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
        (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
        (Value::Integer(a), Value::Double(b)) => compare_mixed(*b, *a).reverse(),
        (Value::Double(a), Value::Integer(b)) => compare_mixed(*a, *b),
        (Value::Double(a), Value::Double(b)) => compare_doubles(*a, *b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => compare_strings(a, b),
        (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
        (
            Value::Reference {
                database: left_db,
                path: left_path,
            },
            Value::Reference {
                database: right_db,
                path: right_path,
            },
        ) => compare_references(left_db, left_path, right_db, right_path),
        (Value::GeoPoint(a), Value::GeoPoint(b)) => compare_geo_points(a, b),
        (Value::Array(a), Value::Array(b)) => compare_arrays(a, b),
        (Value::Map(a), Value::Map(b)) => {
            match (is_server_timestamp(left), is_server_timestamp(right)) {
                (true, true) => local_write_time(left).cmp(&local_write_time(right)),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => compare_maps(a, b),
            }
        }
        // Different type classes.
        _ => left.type_order().cmp(&right.type_order()),
    }
}

/// Orders strings by Unicode code point, then by length.
fn compare_strings(left: &str, right: &str) -> Ordering {
    left.chars().cmp(right.chars())
}

fn compare_references(
    left_db: &DatabaseId,
    left_path: &[String],
    right_db: &DatabaseId,
    right_path: &[String],
) -> Ordering {
    left_db.cmp(right_db).then_with(|| {
        for (l, r) in left_path.iter().zip(right_path) {
            let cmp = compare_strings(l, r);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        left_path.len().cmp(&right_path.len())
    })
}

fn compare_geo_points(left: &GeoPoint, right: &GeoPoint) -> Ordering {
    compare_doubles(left.latitude, right.latitude)
        .then_with(|| compare_doubles(left.longitude, right.longitude))
}

fn compare_arrays(left: &[Value], right: &[Value]) -> Ordering {
    for (l, r) in left.iter().zip(right) {
        let cmp = compare(l, r);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    left.len().cmp(&right.len())
}

/// Walks both maps in key order comparing key, then value; a map whose
/// entries are a prefix of the other's sorts first.
fn compare_maps(left: &MapValue, right: &MapValue) -> Ordering {
    let left_entries = sorted_entries(left);
    let right_entries = sorted_entries(right);
    for ((lk, lv), (rk, rv)) in left_entries.iter().zip(&right_entries) {
        let cmp = compare_strings(lk, rk).then_with(|| compare(lv, rv));
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    left_entries.len().cmp(&right_entries.len())
}
