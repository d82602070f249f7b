//! Utility modules.

pub mod datetime;
pub mod numeric;

pub use datetime::{format_timestamp_rfc3339, parse_timestamp_rfc3339, DateTimeParseError};
pub use numeric::{canonical_double_bits, compare_doubles, compare_mixed, format_double, CANONICAL_NAN_BITS};
