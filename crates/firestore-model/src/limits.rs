//! Compile-time limits enforced by validation.

/// Maximum nesting depth of maps and arrays inside a document.
pub const MAX_NESTING_DEPTH: usize = 20;

/// Seconds of 0001-01-01T00:00:00Z, the earliest representable timestamp.
pub const MIN_TIMESTAMP_SECONDS: i64 = -62_135_596_800;

/// Seconds of 9999-12-31T23:59:59Z, the latest representable timestamp.
pub const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

/// Exclusive upper bound for the nanosecond component of a timestamp.
pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
