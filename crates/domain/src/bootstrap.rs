//! Server-rendered page state handed to the client when the page loads.

use serde::Deserialize;

use crate::events::EventItem;
use crate::preferences::{Settings, Theme};

/// An email recipient of new-event alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Recipient {
    /// Identifier the server accepts in `/api/toggle-recipient/:email` and
    /// `/api/test-single-email`.
    pub email: String,
    /// Redacted form shown until revealed.
    pub masked: String,
    pub enabled: bool,
}

impl Recipient {
    /// Text shown in lists: the masked form, or the identifier if the server
    /// did not mask it.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.masked.is_empty() {
            &self.email
        } else {
            &self.masked
        }
    }
}

/// State the server knew when it rendered the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageBootstrap {
    /// Application name used in headings and notifications.
    pub title: String,
    pub next_check_seconds: u64,
    pub next_heartbeat_seconds: u64,
    pub total_checks: u64,
    pub emails_sent: u64,
    /// Number of distinct events already seen by the tracker.
    pub seen_count: u64,
    pub uptime_start: Option<String>,
    pub settings: Settings,
    pub theme: Theme,
    pub notifications_enabled: bool,
    pub recipients: Vec<Recipient>,
    /// Most recently seen events, newest first.
    pub recent_events: Vec<EventItem>,
}

impl Default for PageBootstrap {
    fn default() -> Self {
        Self {
            title: "Flea Market Tracker".to_string(),
            next_check_seconds: 0,
            next_heartbeat_seconds: 0,
            total_checks: 0,
            emails_sent: 0,
            seen_count: 0,
            uptime_start: None,
            settings: Settings::default(),
            theme: Theme::default(),
            notifications_enabled: false,
            recipients: Vec::new(),
            recent_events: Vec::new(),
        }
    }
}
