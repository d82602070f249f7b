//! Timestamp values.
//!
//! A timestamp is a point in time independent of any time zone, stored as
//! whole seconds since the Unix epoch plus a non-negative nanosecond
//! adjustment. Negative second values with positive nanos count forward in
//! time, so `(-1, 500_000_000)` is half a second before the epoch.

use std::fmt;
use std::str::FromStr;

use crate::util::datetime::{format_timestamp_rfc3339, parse_timestamp_rfc3339, DateTimeParseError};

/// A UTC point in time with nanosecond precision.
///
/// Field order matters: the derived `Ord` compares `seconds` first, then
/// `nanos`, which is the server ordering for timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    /// Seconds since 1970-01-01T00:00:00Z.
    pub seconds: i64,
    /// Non-negative fraction of a second, in nanoseconds (0..=999,999,999).
    pub nanos: i32,
}

impl Timestamp {
    /// Creates a timestamp. No range checking is performed; see
    /// [`crate::validate::validate_value`].
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// The Unix epoch.
    pub const EPOCH: Timestamp = Timestamp::new(0, 0);

    /// Parses an RFC 3339 datetime, normalizing any offset to UTC.
    pub fn parse_rfc3339(s: &str) -> Result<Self, DateTimeParseError> {
        let (seconds, nanos) = parse_timestamp_rfc3339(s)?;
        Ok(Self { seconds, nanos })
    }

    /// Formats this timestamp as an RFC 3339 UTC string.
    pub fn to_rfc3339(&self) -> String {
        format_timestamp_rfc3339(self.seconds, self.nanos)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl FromStr for Timestamp {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rfc3339(s)
    }
}
