//! RFC 3339 parsing and formatting for timestamps.
//!
//! Converts between RFC 3339 strings and the `(seconds, nanos)` pair used by
//! [`crate::model::Timestamp`]. Formatting always produces UTC (`Z`); parsing
//! accepts `Z` or a `+HH:MM`/`-HH:MM` offset and normalizes to UTC.

use thiserror::Error;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Error type for RFC 3339 parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DateTimeParseError {
    pub message: String,
}

impl DateTimeParseError {
    fn new(what: &str, input: &str) -> Self {
        Self {
            message: format!("{}: {}", what, input),
        }
    }
}

/// Parses a timezone offset string (Z, +HH:MM, -HH:MM) and returns offset in minutes.
fn parse_timezone_offset(offset: &str) -> Result<i64, DateTimeParseError> {
    if offset == "Z" || offset == "z" {
        return Ok(0);
    }

    let bytes = offset.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return Err(DateTimeParseError::new("Invalid timezone offset", offset));
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(DateTimeParseError::new("Invalid timezone offset", offset)),
    };

    let hours = parse_digits(&offset[1..3])
        .ok_or_else(|| DateTimeParseError::new("Invalid timezone offset", offset))?;
    let minutes = parse_digits(&offset[4..6])
        .ok_or_else(|| DateTimeParseError::new("Invalid timezone offset", offset))?;

    if hours > 23 || minutes > 59 {
        return Err(DateTimeParseError::new("Invalid timezone offset", offset));
    }

    Ok(sign * (hours * 60 + minutes))
}

/// Parses a fixed-width run of ASCII digits.
fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses fractional seconds digits and returns nanoseconds.
///
/// Digits beyond nanosecond precision are truncated.
fn parse_fractional_nanos(frac: &str) -> i32 {
    let mut nanos = 0i32;
    for (i, b) in frac.bytes().take(9).enumerate() {
        nanos += i32::from(b - b'0') * 10i32.pow(8 - i as u32);
    }
    nanos
}

/// Formats nanoseconds as a fractional seconds string, omitting it if zero.
fn format_fractional_nanos(nanos: i32) -> String {
    if nanos == 0 {
        return String::new();
    }
    let digits = format!("{:09}", nanos);
    format!(".{}", digits.trim_end_matches('0'))
}

/// Returns true if the given year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since the Unix epoch for a civil date (Howard Hinnant's algorithm).
fn date_to_days(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let m = if month <= 2 { month + 9 } else { month - 3 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * m + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Converts days since the Unix epoch to (year, month, day).
fn days_to_date(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Formats `(seconds, nanos)` as an RFC 3339 UTC datetime string.
///
/// Fractional seconds are printed with trailing zeros trimmed and omitted
/// entirely when `nanos` is zero.
pub fn format_timestamp_rfc3339(seconds: i64, nanos: i32) -> String {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let secs_of_day = seconds.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = days_to_date(days);

    let hour = secs_of_day / SECONDS_PER_HOUR;
    let minute = (secs_of_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let second = secs_of_day % SECONDS_PER_MINUTE;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}Z",
        year,
        month,
        day,
        hour,
        minute,
        second,
        format_fractional_nanos(nanos)
    )
}

/// Parses an RFC 3339 datetime string into `(seconds, nanos)` in UTC.
///
/// Accepts `T`, `t` or a space as the date/time separator. A missing offset is
/// treated as UTC.
pub fn parse_timestamp_rfc3339(s: &str) -> Result<(i64, i32), DateTimeParseError> {
    if !s.is_ascii() || s.len() < 19 {
        return Err(DateTimeParseError::new("Invalid RFC 3339 datetime", s));
    }

    let bytes = s.as_bytes();
    if bytes[4] != b'-'
        || bytes[7] != b'-'
        || !matches!(bytes[10], b'T' | b't' | b' ')
        || bytes[13] != b':'
        || bytes[16] != b':'
    {
        return Err(DateTimeParseError::new("Invalid RFC 3339 datetime", s));
    }

    let field = |range: std::ops::Range<usize>, what: &str| {
        parse_digits(&s[range]).ok_or_else(|| DateTimeParseError::new(what, s))
    };
    let year = field(0..4, "Invalid year in datetime")?;
    let month = field(5..7, "Invalid month in datetime")?;
    let day = field(8..10, "Invalid day in datetime")?;
    let hour = field(11..13, "Invalid hours in datetime")?;
    let minute = field(14..16, "Invalid minutes in datetime")?;
    let second = field(17..19, "Invalid seconds in datetime")?;

    if !(1..=12).contains(&month) {
        return Err(DateTimeParseError::new("Invalid month in datetime", s));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(DateTimeParseError::new("Invalid day in datetime", s));
    }
    if hour > 23 || minute > 59 || second > 59 {
        return Err(DateTimeParseError::new("Invalid time in datetime", s));
    }

    let rest = &s[19..];
    let (nanos, offset) = match rest.strip_prefix('.') {
        Some(frac_and_tz) => {
            let frac_len = frac_and_tz
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(frac_and_tz.len());
            if frac_len == 0 {
                return Err(DateTimeParseError::new("Invalid fractional seconds", s));
            }
            (
                parse_fractional_nanos(&frac_and_tz[..frac_len]),
                &frac_and_tz[frac_len..],
            )
        }
        None => (0, rest),
    };

    let offset_min = if offset.is_empty() {
        0
    } else {
        parse_timezone_offset(offset)?
    };

    let seconds = date_to_days(year, month, day) * SECONDS_PER_DAY
        + hour * SECONDS_PER_HOUR
        + minute * SECONDS_PER_MINUTE
        + second
        - offset_min * SECONDS_PER_MINUTE;

    Ok((seconds, nanos))
}
