//! Report timestamps and elapsed-time rendering.
//!
//! Foreman emits UTC timestamps as `2012-02-20T22:06:12Z`. The zone token
//! is stripped and the rest parsed as a naive UTC time; no offset
//! arithmetic is attempted.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::error::{ProbeError, ProbeResult};

const REPORT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const REPORT_BODY_LEN: usize = "YYYY-MM-DDTHH:MM:SS".len();
const SECONDS_PER_DAY: u64 = 86_400;

/// Parse a `YYYY-MM-DDTHH:MM:SS<zone>` timestamp, e.g. `2012-02-20T22:06:12Z`.
///
/// The trailing alphabetic zone token is required and discarded.
pub fn parse_report_timestamp(value: &str) -> ProbeResult<DateTime<Utc>> {
    let invalid = || ProbeError::InvalidTimestamp {
        value: value.to_string(),
    };

    let body = value.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if body.len() == value.len() || body.len() != REPORT_BODY_LEN {
        return Err(invalid());
    }

    let naive = NaiveDateTime::parse_from_str(body, REPORT_FORMAT).map_err(|_| invalid())?;
    Ok(naive.and_utc())
}

/// Current UTC time truncated to whole seconds.
#[must_use]
pub fn now_seconds() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}

/// A span of whole minutes, saturating instead of overflowing.
#[must_use]
pub fn minutes(value: i64) -> TimeDelta {
    TimeDelta::try_minutes(value).unwrap_or(if value < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    })
}

/// Render a span as `H:MM:SS`, with a `N day(s), ` prefix past 24 hours.
///
/// Negative spans render as their absolute value prefixed with `-`.
#[must_use]
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let days = total / SECONDS_PER_DAY;
    let rest = total % SECONDS_PER_DAY;
    let (hours, minutes, seconds) = (rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => format!("{sign}{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("{sign}1 day, {hours}:{minutes:02}:{seconds:02}"),
        n => format!("{sign}{n} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}
