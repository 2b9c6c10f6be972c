//! `GET /api/status`: authoritative schedule and running totals.

use serde::Deserialize;

use crate::time::{Timestamp, parse_timestamp, seconds_until};

/// Tracker configuration as echoed by the server.
///
/// Only the fields the dashboard reads are modelled; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Absolute time of the next event check (ISO-8601).
    pub next_check: Option<String>,
    /// Absolute time of the next heartbeat email (ISO-8601).
    pub next_heartbeat: Option<String>,
    pub total_checks: u64,
    pub emails_sent: u64,
    /// When the background checker started (ISO-8601).
    pub uptime_start: Option<String>,
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    /// Seconds until the next check, pre-computed by the server.
    pub next_check_seconds: Option<i64>,
    /// Seconds until the next heartbeat, pre-computed by the server.
    pub next_heartbeat_seconds: Option<i64>,
    pub config: Option<TrackerConfig>,
}

/// Running totals shown on the stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_checks: u64,
    pub emails_sent: u64,
}

/// Remaining seconds extracted from a status reply.
///
/// `None` means the server gave no usable value and local state must be kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSync {
    pub next_check: Option<u64>,
    pub next_heartbeat: Option<u64>,
}

impl StatusResponse {
    /// Derive the countdown resync from this reply.
    ///
    /// Relative `next_*_seconds` fields are authoritative. When one is absent,
    /// the absolute `config.next_*` timestamp is converted against `now`.
    /// Only strictly positive results are reported.
    #[must_use]
    pub fn timer_sync(&self, now: Timestamp) -> TimerSync {
        let config = self.config.as_ref();
        TimerSync {
            next_check: pick_remaining(
                self.next_check_seconds,
                config.and_then(|c| c.next_check.as_deref()),
                now,
            ),
            next_heartbeat: pick_remaining(
                self.next_heartbeat_seconds,
                config.and_then(|c| c.next_heartbeat.as_deref()),
                now,
            ),
        }
    }

    /// Totals for the stat cards, when the reply carried a config block.
    #[must_use]
    pub fn totals(&self) -> Option<Totals> {
        self.config.as_ref().map(|c| Totals {
            total_checks: c.total_checks,
            emails_sent: c.emails_sent,
        })
    }

    /// Parsed tracker start time, if present and well-formed.
    #[must_use]
    pub fn uptime_start(&self) -> Option<Timestamp> {
        self.config
            .as_ref()
            .and_then(|c| c.uptime_start.as_deref())
            .and_then(parse_timestamp)
    }
}

fn pick_remaining(relative: Option<i64>, absolute: Option<&str>, now: Timestamp) -> Option<u64> {
    let seconds = match relative {
        Some(secs) => u64::try_from(secs).unwrap_or(0),
        None => absolute
            .and_then(parse_timestamp)
            .map_or(0, |target| seconds_until(target, now)),
    };
    (seconds > 0).then_some(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn should_prefer_relative_seconds() {
        let now = Utc::now();
        let status = StatusResponse {
            next_check_seconds: Some(120),
            next_heartbeat_seconds: Some(3600),
            config: Some(TrackerConfig {
                next_check: Some((now + Duration::seconds(999)).to_rfc3339()),
                ..TrackerConfig::default()
            }),
        };
        let sync = status.timer_sync(now);
        assert_eq!(sync.next_check, Some(120));
        assert_eq!(sync.next_heartbeat, Some(3600));
    }

    #[test]
    fn should_fall_back_to_absolute_timestamps() {
        let now = Utc::now();
        let status = StatusResponse {
            config: Some(TrackerConfig {
                next_check: Some((now + Duration::seconds(300)).to_rfc3339()),
                next_heartbeat: Some("garbage".to_string()),
                ..TrackerConfig::default()
            }),
            ..StatusResponse::default()
        };
        let sync = status.timer_sync(now);
        assert_eq!(sync.next_check, Some(300));
        assert_eq!(sync.next_heartbeat, None);
    }

    #[test]
    fn should_ignore_zero_and_negative_seconds() {
        let status = StatusResponse {
            next_check_seconds: Some(0),
            next_heartbeat_seconds: Some(-5),
            config: None,
        };
        assert_eq!(status.timer_sync(Utc::now()), TimerSync::default());
    }

    #[test]
    fn should_parse_server_payload() {
        let json = r#"{
            "next_check_seconds": 42,
            "config": {
                "total_checks": 17,
                "emails_sent": 3,
                "uptime_start": "2024-05-01T10:00:00+00:00",
                "tracker_enabled": true
            },
            "status": {"last_check": null}
        }"#;
        let status: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(status.next_check_seconds, Some(42));
        assert_eq!(
            status.totals(),
            Some(Totals {
                total_checks: 17,
                emails_sent: 3
            })
        );
        assert!(status.uptime_start().is_some());
    }

    #[test]
    fn should_report_no_totals_without_config() {
        assert!(StatusResponse::default().totals().is_none());
    }
}
