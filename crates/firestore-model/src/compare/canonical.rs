//! Canonical string rendering of values.
//!
//! Canonical ids serve as cache keys, so equal values always render
//! identically (all NaNs share `NaN`). The converse does not hold across
//! types: the string `"1"` and the integer `1` share an id. Map keys are
//! emitted in byte-wise order regardless of insertion order.

use std::fmt::{self, Write};

use crate::model::server_timestamp::{
    is_server_timestamp, local_write_time, LOCAL_WRITE_TIME_KEY, SERVER_TIMESTAMP_SENTINEL,
    TYPE_KEY,
};
use crate::model::{format_document_path, sorted_entries, Value};
use crate::util::format_double;

/// Returns the canonical id of `value`.
///
/// | Type      | Rendering                              |
/// |-----------|----------------------------------------|
/// | null      | `null`                                 |
/// | boolean   | `true` / `false`                       |
/// | integer   | decimal, e.g. `1`                      |
/// | double    | at least one fractional digit, `1.0`   |
/// | timestamp | `time(seconds,nanos)`                  |
/// | string    | the string itself                      |
/// | bytes     | lowercase hex                          |
/// | reference | document path, `coll/doc`              |
/// | geo point | `geo(lat,lng)`                         |
/// | array     | `[v1,v2]`                              |
/// | map       | `{k1:v1,k2:v2}`, keys sorted           |
///
/// A reference's database is omitted, so references to the same path in
/// different databases share an id. A server timestamp placeholder renders
/// without its previous value, because placeholders are equal whenever
/// their local write times are.
pub fn canonical_id(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => {
            let _ = write!(out, "{}", i);
        }
        Value::Double(d) => out.push_str(&format_double(*d)),
        Value::Timestamp(ts) => {
            let _ = write!(out, "time({},{})", ts.seconds, ts.nanos);
        }
        Value::String(s) => out.push_str(s),
        Value::Bytes(bytes) => out.push_str(&hex::encode(bytes)),
        Value::Reference { path, .. } => out.push_str(&format_document_path(path)),
        Value::GeoPoint(point) => {
            let _ = write!(
                out,
                "geo({},{})",
                format_double(point.latitude),
                format_double(point.longitude)
            );
        }
        Value::Array(values) => {
            out.push('[');
            for (i, element) in values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(element, out);
            }
            out.push(']');
        }
        Value::Map(_) if is_server_timestamp(value) => {
            let _ = write!(out, "{{{}:", LOCAL_WRITE_TIME_KEY);
            if let Some(ts) = local_write_time(value) {
                let _ = write!(out, "time({},{})", ts.seconds, ts.nanos);
            }
            let _ = write!(out, ",{}:{}}}", TYPE_KEY, SERVER_TIMESTAMP_SENTINEL);
        }
        Value::Map(fields) => {
            out.push('{');
            for (i, (key, field)) in sorted_entries(fields).into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(key);
                out.push(':');
                write_canonical(field, out);
            }
            out.push('}');
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical_id(self))
    }
}
