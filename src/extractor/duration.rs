//! Duration conversion and formatting for video records

use crate::utils::error::{Result, ScrapeError};
use std::fmt::Write;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Whole units of a duration, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Parts {
    fn split(total_seconds: u64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: total_seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: total_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }
}

/// Convert a millisecond count captured from the page into whole seconds,
/// truncating any remainder.
pub fn milliseconds_to_seconds(milliseconds: &str) -> Result<u64> {
    let ms: u64 = milliseconds
        .trim()
        .parse()
        .map_err(|source| ScrapeError::InvalidNumber {
            field: "duration",
            value: milliseconds.to_string(),
            source,
        })?;

    Ok(ms / 1000)
}

/// Human-readable duration: the largest non-zero unit unpadded, every smaller
/// unit zero-padded to two digits (`59`, `1:00`, `1:00:00`, `1:00:00:00`).
pub fn seconds_to_human_string(total_seconds: u64) -> String {
    let Parts {
        days,
        hours,
        minutes,
        seconds,
    } = Parts::split(total_seconds);

    if days > 0 {
        format!("{}:{:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        seconds.to_string()
    }
}

/// ISO-8601 style duration (`PT3M20S`, `P1D`). Zero units are omitted and a
/// zero duration is `PT0S`.
pub fn seconds_to_machine_string(total_seconds: u64) -> String {
    let parts = Parts::split(total_seconds);
    let mut out = String::from("P");

    // Writing to a String cannot fail
    if parts.days > 0 {
        let _ = write!(out, "{}D", parts.days);
    }

    if parts.hours > 0 || parts.minutes > 0 || parts.seconds > 0 {
        out.push('T');
        for (value, unit) in [(parts.hours, 'H'), (parts.minutes, 'M'), (parts.seconds, 'S')] {
            if value > 0 {
                let _ = write!(out, "{}{}", value, unit);
            }
        }
    }

    if out == "P" {
        return "PT0S".to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_string() {
        let cases = [
            (0, "0"),
            (1, "1"),
            (59, "59"),
            (60, "1:00"),
            (61, "1:01"),
            (200, "3:20"),
            (3599, "59:59"),
            (3600, "1:00:00"),
            (86400, "1:00:00:00"),
            (90061, "1:01:01:01"),
        ];
        for (seconds, expected) in cases {
            assert_eq!(seconds_to_human_string(seconds), expected, "{}s", seconds);
        }
    }

    #[test]
    fn test_machine_string() {
        let cases = [
            (0, "PT0S"),
            (1, "PT1S"),
            (59, "PT59S"),
            (60, "PT1M"),
            (61, "PT1M1S"),
            (200, "PT3M20S"),
            (3599, "PT59M59S"),
            (3600, "PT1H"),
            (3601, "PT1H1S"),
            (86400, "P1D"),
            (90061, "P1DT1H1M1S"),
        ];
        for (seconds, expected) in cases {
            assert_eq!(seconds_to_machine_string(seconds), expected, "{}s", seconds);
        }
    }

    #[test]
    fn test_milliseconds_to_seconds() {
        assert_eq!(milliseconds_to_seconds("1000").unwrap(), 1);
        assert_eq!(milliseconds_to_seconds("3000").unwrap(), 3);
        assert_eq!(milliseconds_to_seconds("60000").unwrap(), 60);
        assert_eq!(milliseconds_to_seconds("1999").unwrap(), 1);
        assert_eq!(milliseconds_to_seconds("0").unwrap(), 0);
    }

    #[test]
    fn test_milliseconds_rejects_garbage() {
        assert!(matches!(
            milliseconds_to_seconds("12s"),
            Err(ScrapeError::InvalidNumber { field: "duration", .. })
        ));
    }
}
