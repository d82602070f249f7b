//! Semantic validation for value trees.
//!
//! Values are constructible with any field contents, so the model itself
//! never rejects data. This module checks the constraints the server applies
//! before accepting a document:
//! - Timestamp nanos and seconds ranges
//! - Geo point bounds
//! - Maximum nesting depth of maps and arrays
//! - Non-empty reference paths
//! - Well-formed server timestamp placeholders

use crate::error::ValidationError;
use crate::limits::{
    MAX_LATITUDE, MAX_LONGITUDE, MAX_NESTING_DEPTH, MAX_TIMESTAMP_SECONDS, MIN_LATITUDE,
    MIN_LONGITUDE, MIN_TIMESTAMP_SECONDS, NANOS_PER_SECOND,
};
use crate::model::server_timestamp::{
    has_sentinel_type, is_server_timestamp, LOCAL_WRITE_TIME_KEY, PREVIOUS_VALUE_KEY,
};
use crate::model::{GeoPoint, Timestamp, Value};

/// Validates a value tree, returning the first violation found.
///
/// Map entries are visited in unspecified order, so when a tree has several
/// violations which one is reported is unspecified too.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    validate_at(value, 0)
}

/// Validates a timestamp against the representable range.
pub fn validate_timestamp(ts: &Timestamp) -> Result<(), ValidationError> {
    if !(0..NANOS_PER_SECOND).contains(&ts.nanos) {
        return Err(ValidationError::NanosOutOfRange { nanos: ts.nanos });
    }
    if !(MIN_TIMESTAMP_SECONDS..=MAX_TIMESTAMP_SECONDS).contains(&ts.seconds) {
        return Err(ValidationError::SecondsOutOfRange {
            seconds: ts.seconds,
        });
    }
    Ok(())
}

/// Validates geo point bounds. NaN coordinates are out of range.
pub fn validate_geo_point(point: &GeoPoint) -> Result<(), ValidationError> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&point.latitude) {
        return Err(ValidationError::LatitudeOutOfRange {
            latitude: point.latitude,
        });
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&point.longitude) {
        return Err(ValidationError::LongitudeOutOfRange {
            longitude: point.longitude,
        });
    }
    Ok(())
}

fn validate_at(value: &Value, depth: usize) -> Result<(), ValidationError> {
    match value {
        Value::Timestamp(ts) => validate_timestamp(ts),
        Value::GeoPoint(point) => validate_geo_point(point),
        Value::Reference { path, .. } => validate_reference_path(path),
        Value::Array(values) => {
            check_depth(depth)?;
            values.iter().try_for_each(|v| validate_at(v, depth + 1))
        }
        Value::Map(fields) => {
            if is_server_timestamp(value) {
                return validate_server_timestamp(value, depth);
            }
            if has_sentinel_type(value) {
                return Err(ValidationError::MalformedServerTimestamp);
            }
            check_depth(depth)?;
            fields.values().try_for_each(|v| validate_at(v, depth + 1))
        }
        _ => Ok(()),
    }
}

fn check_depth(depth: usize) -> Result<(), ValidationError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ValidationError::NestingTooDeep {
            max: MAX_NESTING_DEPTH,
        });
    }
    Ok(())
}

fn validate_reference_path(path: &[String]) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::EmptyReferencePath);
    }
    match path.iter().position(String::is_empty) {
        Some(index) => Err(ValidationError::EmptyReferenceSegment { index }),
        None => Ok(()),
    }
}

/// A placeholder counts as one level of nesting for its previous value.
fn validate_server_timestamp(value: &Value, depth: usize) -> Result<(), ValidationError> {
    let Some(fields) = value.as_map() else {
        return Err(ValidationError::MalformedServerTimestamp);
    };
    match fields.get(LOCAL_WRITE_TIME_KEY) {
        Some(Value::Timestamp(ts)) => validate_timestamp(ts)?,
        _ => return Err(ValidationError::MalformedServerTimestamp),
    }
    match fields.get(PREVIOUS_VALUE_KEY) {
        Some(previous) => {
            check_depth(depth)?;
            validate_at(previous, depth + 1)
        }
        None => Ok(()),
    }
}
