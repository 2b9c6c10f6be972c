//! Time and timestamp helpers, plus the display formats used by the timers
//! and diagnostics panels.

use chrono::{DateTime, Utc};

/// UTC timestamp used for watermarks and server-provided schedule times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 / ISO-8601 timestamp as emitted by the server
/// (`2024-05-01T10:00:00+00:00` or with a trailing `Z`).
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whole seconds from `now` until `target`, floored at zero.
#[must_use]
pub fn seconds_until(target: Timestamp, now: Timestamp) -> u64 {
    u64::try_from((target - now).num_seconds()).unwrap_or(0)
}

/// Render a countdown as `MM:SS`, or `HH:MM:SS` when `show_hours` is set or
/// the value exceeds one hour. Zero renders as all zeros.
#[must_use]
pub fn format_time(seconds: u64, show_hours: bool) -> String {
    if seconds == 0 {
        return if show_hours { "00:00:00" } else { "00:00" }.to_string();
    }

    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;

    if show_hours || h > 0 {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

const BYTE_UNITS: [&str; 3] = ["B", "KB", "MB"];

/// Render a byte count with one decimal (`1.5 KB`), dropping a trailing `.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.1}");
    let rounded = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{rounded} {}", BYTE_UNITS[unit])
}

/// Render how long the tracker has been up: `2d 3h 4m`, `3h 4m` or `4m`.
///
/// Returns `Just started` when the start time is unknown.
#[must_use]
pub fn format_uptime(start: Option<Timestamp>, now: Timestamp) -> String {
    let Some(start) = start else {
        return "Just started".to_string();
    };
    let total = seconds_until(now, start);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3600;
    let mins = (total % 3600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {mins}m")
    } else if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_format_zero_without_hours() {
        assert_eq!(format_time(0, false), "00:00");
    }

    #[test]
    fn should_format_zero_with_hours() {
        assert_eq!(format_time(0, true), "00:00:00");
    }

    #[test]
    fn should_format_hours_minutes_seconds() {
        assert_eq!(format_time(3661, true), "01:01:01");
    }

    #[test]
    fn should_format_minutes_and_seconds() {
        assert_eq!(format_time(125, false), "02:05");
    }

    #[test]
    fn should_promote_to_hours_when_over_an_hour() {
        assert_eq!(format_time(7322, false), "02:02:02");
    }

    #[test]
    fn should_parse_offset_and_zulu_timestamps() {
        let a = parse_timestamp("2024-05-01T10:00:00+00:00").unwrap();
        let b = parse_timestamp("2024-05-01T10:00:00Z").unwrap();
        assert_eq!(a, b);
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn should_floor_seconds_until_at_zero() {
        let now = Utc::now();
        assert_eq!(seconds_until(now - Duration::seconds(30), now), 0);
        assert_eq!(seconds_until(now + Duration::seconds(90), now), 90);
    }

    #[test]
    fn should_format_bytes_with_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5 MB");
    }

    #[test]
    fn should_cap_byte_units_at_megabytes() {
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024), "2048 MB");
    }

    #[test]
    fn should_format_uptime_ranges() {
        let now = Utc::now();
        assert_eq!(format_uptime(None, now), "Just started");
        assert_eq!(format_uptime(Some(now - Duration::minutes(7)), now), "7m");
        assert_eq!(
            format_uptime(Some(now - Duration::minutes(125)), now),
            "2h 5m"
        );
        assert_eq!(
            format_uptime(Some(now - Duration::hours(50)), now),
            "2d 2h 0m"
        );
    }
}
