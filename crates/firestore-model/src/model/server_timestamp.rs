//! Server timestamp placeholders.
//!
//! A field written with a server-assigned timestamp is stored locally as a
//! map carrying reserved keys until the server's value arrives:
//!
//! ```text
//! {
//!   __type__: "server_timestamp",
//!   __local_write_time__: <Timestamp>,
//!   __previous_value__: <Value>        // optional
//! }
//! ```
//!
//! Placeholders order after every concrete timestamp and compare by their
//! local write time. How a placeholder is presented to application code
//! (pending, estimated, previous) is decided by the caller; this module only
//! exposes the pieces.

use crate::model::{MapValue, Timestamp, Value};

/// Key holding the sentinel type marker.
pub const TYPE_KEY: &str = "__type__";

/// Sentinel stored under [`TYPE_KEY`].
pub const SERVER_TIMESTAMP_SENTINEL: &str = "server_timestamp";

/// Key holding the local time at which the write was issued.
pub const LOCAL_WRITE_TIME_KEY: &str = "__local_write_time__";

/// Key holding the field's value before the pending write, if any.
pub const PREVIOUS_VALUE_KEY: &str = "__previous_value__";

/// Maximum number of entries a placeholder map may carry.
const MAX_PLACEHOLDER_FIELDS: usize = 3;

/// Creates a placeholder for a pending server timestamp.
///
/// If `previous` is itself a placeholder, its own previous value is
/// stored instead so placeholders never nest.
pub fn server_timestamp(local_write_time: Timestamp, previous: Option<Value>) -> Value {
    let mut fields = MapValue::default();
    fields.insert(
        TYPE_KEY.to_string(),
        Value::String(SERVER_TIMESTAMP_SENTINEL.to_string()),
    );
    fields.insert(
        LOCAL_WRITE_TIME_KEY.to_string(),
        Value::Timestamp(local_write_time),
    );

    let previous = match previous {
        Some(prev) if is_server_timestamp(&prev) => previous_value(&prev).cloned(),
        other => other,
    };
    if let Some(prev) = previous {
        fields.insert(PREVIOUS_VALUE_KEY.to_string(), prev);
    }

    Value::Map(fields)
}

/// Returns true if `value` is a well-formed server timestamp placeholder.
///
/// A map only counts as a placeholder when it carries the sentinel type, a
/// timestamp-typed local write time, and no keys besides the reserved ones.
pub fn is_server_timestamp(value: &Value) -> bool {
    let Value::Map(fields) = value else {
        return false;
    };
    if fields.len() > MAX_PLACEHOLDER_FIELDS {
        return false;
    }
    let is_sentinel = matches!(
        fields.get(TYPE_KEY),
        Some(Value::String(s)) if s == SERVER_TIMESTAMP_SENTINEL
    );
    let has_write_time = matches!(fields.get(LOCAL_WRITE_TIME_KEY), Some(Value::Timestamp(_)));
    let extra_keys = fields.keys().any(|key| {
        key != TYPE_KEY && key != LOCAL_WRITE_TIME_KEY && key != PREVIOUS_VALUE_KEY
    });
    is_sentinel && has_write_time && !extra_keys
}

/// Returns true if `value` claims to be a placeholder (has the sentinel type
/// marker) regardless of whether the rest of it is well formed.
pub(crate) fn has_sentinel_type(value: &Value) -> bool {
    matches!(
        value.as_map().and_then(|fields| fields.get(TYPE_KEY)),
        Some(Value::String(s)) if s == SERVER_TIMESTAMP_SENTINEL
    )
}

/// Returns the local write time of a placeholder.
pub fn local_write_time(value: &Value) -> Option<Timestamp> {
    if !is_server_timestamp(value) {
        return None;
    }
    value
        .as_map()
        .and_then(|fields| fields.get(LOCAL_WRITE_TIME_KEY))
        .and_then(Value::as_timestamp)
}

/// Returns the value a placeholder replaced, if one was recorded.
///
/// Nested placeholders are followed to the first concrete value.
pub fn previous_value(value: &Value) -> Option<&Value> {
    if !is_server_timestamp(value) {
        return None;
    }
    let previous = value.as_map()?.get(PREVIOUS_VALUE_KEY)?;
    if is_server_timestamp(previous) {
        previous_value(previous)
    } else {
        Some(previous)
    }
}
