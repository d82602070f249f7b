//! Number comparison and rendering shared by ordering, equality and
//! canonical ids.

use std::cmp::Ordering;

/// Bit pattern every NaN is canonicalized to before bitwise comparison.
///
/// This is the quiet NaN produced by `f64::NAN`.
pub const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// `i64::MIN` is exactly representable as a double.
const I64_MIN_AS_F64: f64 = -9_223_372_036_854_775_808.0;

/// 2^63: the smallest double strictly greater than every `i64`.
const I64_LIMIT_AS_F64: f64 = 9_223_372_036_854_775_808.0;

/// Returns the bits of `value`, with every NaN mapped to
/// [`CANONICAL_NAN_BITS`].
///
/// Two doubles are equal under value equality iff their canonical bits match,
/// so `-0.0` and `0.0` differ while all NaNs agree.
#[inline]
pub fn canonical_double_bits(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        value.to_bits()
    }
}

/// Orders two doubles with NaN before every other number.
///
/// All NaNs compare equal to each other and `-0.0` equals `0.0`.
pub fn compare_doubles(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

/// Orders a double against an integer on one numeric axis without losing
/// precision for integers beyond 2^53.
pub fn compare_mixed(double_value: f64, int_value: i64) -> Ordering {
    if double_value.is_nan() {
        return Ordering::Less;
    }
    // Also handles negative infinity.
    if double_value < I64_MIN_AS_F64 {
        return Ordering::Less;
    }
    if double_value >= I64_LIMIT_AS_F64 {
        return Ordering::Greater;
    }

    // In range, so the truncating cast is exact up to the fractional part.
    let truncated = double_value as i64;
    match truncated.cmp(&int_value) {
        Ordering::Equal => compare_doubles(double_value, int_value as f64),
        other => other,
    }
}

/// Renders a double with at least one fractional digit.
///
/// Finite values use the shortest representation that round-trips, so two
/// doubles render identically only if they have the same bits. Non-finite
/// values render as `NaN`, `Infinity` and `-Infinity`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut s = format!("{:?}", value);
    if !s.contains('.') {
        match s.find('e') {
            Some(exp) => s.insert_str(exp, ".0"),
            None => s.push_str(".0"),
        }
    }
    s
}
