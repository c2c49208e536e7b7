//! Windows FILETIME conversion for AD timestamp attributes
//! (`lockoutTime`, `pwdLastSet`, `lastLogon`, `accountExpires`).

use chrono::{DateTime, Utc};

/// 100ns intervals between 1601-01-01 and 1970-01-01
const UNIX_EPOCH_OFFSET: i64 = 116_444_736_000_000_000;
const INTERVALS_PER_SECOND: i64 = 10_000_000;
/// `accountExpires` uses this to mean "never"
const NEVER: i64 = i64::MAX;

/// Convert a FILETIME value to a UTC timestamp.
///
/// `0` and the "never" sentinel have no timestamp and yield `None`, as do
/// values before the Unix epoch.
pub fn to_datetime(filetime: i64) -> Option<DateTime<Utc>> {
    if filetime <= 0 || filetime == NEVER {
        return None;
    }

    let since_epoch = filetime.checked_sub(UNIX_EPOCH_OFFSET)?;
    if since_epoch < 0 {
        return None;
    }

    let seconds = since_epoch / INTERVALS_PER_SECOND;
    let nanos = (since_epoch % INTERVALS_PER_SECOND) * 100;
    DateTime::from_timestamp(seconds, u32::try_from(nanos).ok()?)
}

/// Parse a textual FILETIME attribute and convert it
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    value.trim().parse::<i64>().ok().and_then(to_datetime)
}
