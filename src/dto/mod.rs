//! Wire-facing data transfer objects and shared formatting helpers.

use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Game control requests and snapshots.
pub mod game;
/// Health check response.
pub mod health;
/// Visible round phase projection.
pub mod phase;
/// Quiz reload summary.
pub mod quiz;
/// Server-sent event payloads.
pub mod sse;
/// Validation helpers for DTOs.
pub mod validation;

pub(crate) fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// Render a duration in whole seconds as a two-digit zero-padded `MM:SS`
/// clock label. Minutes wrap at the hour.
pub fn format_clock(total_secs: u64) -> String {
    let minutes = (total_secs / 60) % 60;
    let secs = total_secs % 60;
    format!("{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn formats_zero() {
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn formats_seconds_only() {
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(299), "04:59");
    }

    #[test]
    fn minutes_wrap_at_the_hour() {
        assert_eq!(format_clock(3_600), "00:00");
        assert_eq!(format_clock(3_661), "01:01");
    }
}
