//! Dashboard configuration: JSON document embedded in the page.
//!
//! The server renders a `<script id="dashboard-config" type="application/json">`
//! element carrying the page state it knew at render time, optionally with
//! polling and logging overrides. Every field has a default so the element is
//! optional.

use serde::Deserialize;
use trackerdash_domain::bootstrap::PageBootstrap;
use trackerdash_domain::console::{CONSOLE_LINE_LIMIT, HISTORY_CARD_LIMIT};

use crate::error::BrowserError;

/// Id of the element holding the configuration document.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Server-rendered page state.
    #[serde(flatten)]
    pub page: PageBootstrap,
    /// Loop periods.
    pub intervals: PollIntervals,
    /// How much of each list to render.
    pub limits: RenderLimits,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Periods of the background loops, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollIntervals {
    /// Countdown tick.
    pub tick_ms: u32,
    /// `GET /api/status` resync.
    pub resync_ms: u32,
    /// `GET /api/console` poll.
    pub console_ms: u32,
    /// `GET /api/notification-check` poll.
    pub notifications_ms: u32,
    /// How long a toast stays on screen.
    pub toast_ms: u32,
}

/// Render caps for the console terminal and the check history grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderLimits {
    pub console_lines: usize,
    pub history_cards: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            tick_ms: 1_000,
            resync_ms: 15_000,
            console_ms: 5_000,
            notifications_ms: 30_000,
            toast_ms: 4_000,
        }
    }
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            console_lines: CONSOLE_LINE_LIMIT,
            history_cards: HISTORY_CARD_LIMIT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "trackerdash=info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Read the configuration element from the current document.
    ///
    /// A missing element yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable, or the element holds
    /// malformed JSON or out-of-range values.
    pub fn load() -> Result<Self, ConfigError> {
        let document = web_sys::window()
            .ok_or(BrowserError::NoWindow)?
            .document()
            .ok_or(BrowserError::NoDocument)?;
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or out-of-range values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("tick_ms", self.intervals.tick_ms),
            ("resync_ms", self.intervals.resync_ms),
            ("console_ms", self.intervals.console_ms),
            ("notifications_ms", self.intervals.notifications_ms),
            ("toast_ms", self.intervals.toast_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Validation(format!("{name} must be non-zero")));
        }
        if self.limits.console_lines == 0 || self.limits.history_cards == 0 {
            return Err(ConfigError::Validation(
                "render limits must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse dashboard config")]
    Parse(#[from] serde_json::Error),
    /// The document could not be read.
    #[error("failed to read dashboard config")]
    Browser(#[from] BrowserError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackerdash_domain::preferences::Theme;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.intervals.tick_ms, 1_000);
        assert_eq!(config.intervals.resync_ms, 15_000);
        assert_eq!(config.intervals.console_ms, 5_000);
        assert_eq!(config.intervals.notifications_ms, 30_000);
        assert_eq!(config.intervals.toast_ms, 4_000);
        assert_eq!(config.limits.console_lines, 50);
        assert_eq!(config.limits.history_cards, 12);
        assert_eq!(config.logging.filter, "trackerdash=info");
        assert_eq!(config.page.title, "Flea Market Tracker");
    }

    #[test]
    fn should_parse_empty_document() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config.intervals, PollIntervals::default());
    }

    #[test]
    fn should_parse_page_state_and_overrides() {
        let config = DashboardConfig::from_json(
            r#"{
                "title": "Market Watch",
                "next_check_seconds": 42,
                "theme": "light",
                "recipients": [{"email": "ann@example.com", "masked": "an***@example.com", "enabled": true}],
                "intervals": {"console_ms": 2000},
                "logging": {"filter": "debug"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.page.title, "Market Watch");
        assert_eq!(config.page.next_check_seconds, 42);
        assert_eq!(config.page.theme, Theme::Light);
        assert_eq!(config.page.recipients.len(), 1);
        assert_eq!(config.intervals.console_ms, 2000);
        assert_eq!(config.intervals.tick_ms, 1_000);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_reject_malformed_json() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn should_reject_zero_interval() {
        let err = DashboardConfig::from_json(r#"{"intervals": {"resync_ms": 0}}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: resync_ms must be non-zero"
        );
    }

    #[test]
    fn should_reject_zero_limits() {
        let err = DashboardConfig::from_json(r#"{"limits": {"history_cards": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
