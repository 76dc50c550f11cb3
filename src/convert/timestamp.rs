use chrono::{DateTime, Datelike};

use super::FormatError;

/// Number of trailing characters holding the sub-second part of the input.
const MILLIS_DIGITS: usize = 3;

/// Everything after the year. chrono's `%Y` signs years past 9999, so the
/// year is written separately.
const TIME_FORMAT: &str = "%m-%dT%H:%M:%SZ";

/// Converts a millisecond epoch string into `YYYY-MM-DDTHH:MM:SSZ` (UTC).
///
/// The last three characters are cut off textually before the remainder is
/// parsed as whole seconds, so milliseconds are truncated and never rounded.
/// Inputs of three characters or fewer leave nothing to parse and fail.
pub fn millis_to_iso8601(millis: &str) -> Result<String, FormatError> {
    let seconds = strip_millis(millis);
    let secs: i64 = seconds
        .trim()
        .parse()
        .map_err(|source| FormatError::InvalidTimestamp {
            value: millis.to_string(),
            source,
        })?;

    let time = DateTime::from_timestamp(secs, 0).ok_or(FormatError::TimestampOutOfRange(secs))?;
    Ok(format!("{:04}-{}", time.year(), time.format(TIME_FORMAT)))
}

fn strip_millis(s: &str) -> &str {
    match s.char_indices().rev().nth(MILLIS_DIGITS - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}
