//! Import timestamp formatting

use chrono::{DateTime, Timelike, Utc};

use crate::error::{Error, Result};

/// Fractional digits carried by the facility dialect (hundreds of
/// nanoseconds, the .NET round-trip precision).
const FRACTION_LIMIT: u32 = 10_000_000;

/// Format the `CommandAliasesLastImported` value for a given instant:
/// `YYYY-MM-DDThh:mm:ss.fffffff-00:00`.
///
/// The `-00:00` suffix is literal; the instant is UTC presented the way the
/// downstream tool stores it. Fails only when the fractional-second
/// component does not fit in seven digits (chrono represents leap seconds
/// as an overflowing nanosecond field). Callers treat that as a warning,
/// not a fatal condition, and fall back to an empty timestamp value.
pub fn last_imported(now: DateTime<Utc>) -> Result<String> {
    let fraction = now.nanosecond() / 100;
    if fraction >= FRACTION_LIMIT {
        return Err(Error::TimestampRange);
    }
    Ok(format!(
        "{}.{:07}-00:00",
        now.format("%Y-%m-%dT%H:%M:%S"),
        fraction
    ))
}
