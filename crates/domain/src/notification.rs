//! Browser notifications for newly discovered events.

use chrono::SecondsFormat;
use serde::Deserialize;

use crate::events::lenient_id;
use crate::time::Timestamp;

/// Status label after the user switches notifications off.
pub const DISABLED_LABEL: &str = "Disabled";

/// An event reported by `GET /api/notification-check`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewEvent {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
}

/// Body of `GET /api/notification-check?since=…`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationCheck {
    pub count: u64,
    pub new_events: Vec<NewEvent>,
    /// Server time of its last check, the next `since` value.
    pub last_check: Option<String>,
}

/// Browser capability and permission for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Unsupported,
    Granted,
    Denied,
    /// Not decided yet; the user can be asked.
    Prompt,
}

impl PermissionState {
    #[must_use]
    pub fn status_label(self) -> &'static str {
        match self {
            Self::Unsupported => "Not supported",
            Self::Granted => "Enabled",
            Self::Denied => "Blocked",
            Self::Prompt => "Click to enable",
        }
    }
}

/// A notification to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserNotification {
    pub title: String,
    pub body: String,
    /// Same-tag notifications replace each other instead of stacking.
    pub tag: Option<String>,
}

impl BrowserNotification {
    /// Shown once when notifications are switched on.
    #[must_use]
    pub fn confirmation(app_title: &str) -> Self {
        Self {
            title: format!("\u{1F3EA} {app_title}"),
            body: "Notifications are now enabled! You will be alerted when new events are found."
                .to_string(),
            tag: None,
        }
    }

    #[must_use]
    pub fn for_event(event: &NewEvent, app_title: &str) -> Self {
        Self {
            title: format!("\u{1F195} New event on {app_title}!"),
            body: event.title.clone(),
            tag: Some(format!("event-{}", event.id)),
        }
    }
}

impl NotificationCheck {
    /// One notification per new event; none when the server reports zero.
    #[must_use]
    pub fn notifications(&self, app_title: &str) -> Vec<BrowserNotification> {
        if self.count == 0 {
            return Vec::new();
        }
        self.new_events
            .iter()
            .map(|event| BrowserNotification::for_event(event, app_title))
            .collect()
    }
}

/// Timestamp of the last notification poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationWatermark {
    since: String,
}

fn iso(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl NotificationWatermark {
    /// Start watching from `now`.
    #[must_use]
    pub fn starting_at(now: Timestamp) -> Self {
        Self { since: iso(now) }
    }

    #[must_use]
    pub fn since(&self) -> &str {
        &self.since
    }

    /// Move to the server's `last_check`, or to `now` if it sent none.
    pub fn advance(&mut self, check: &NotificationCheck, now: Timestamp) {
        self.since = match check.last_check.as_deref() {
            Some(last) if !last.is_empty() => last.to_string(),
            _ => iso(now),
        };
    }
}
