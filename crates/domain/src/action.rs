//! Secure actions: state-changing operations gated by the admin password.
//!
//! A [`SecureAction`] records where to POST, which extra JSON fields to send
//! and what to say on success. The [`PasswordModal`] holds at most one pending
//! action; [`resolve_secure_action`] turns the server's reply into a
//! [`Resolution`] the UI applies.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::preferences::Settings;
use crate::toast::Toast;

/// Inline error when the password field is submitted empty.
pub const EMPTY_PASSWORD: &str = "Please enter password";
/// Inline error after the server rejected the password.
pub const INVALID_PASSWORD: &str = "Invalid password. Please try again.";
/// Toast used when the server reports failure without a message.
pub const ACTION_FAILED: &str = "Action failed";
/// Delay before reloading the page after a successful action.
pub const RELOAD_DELAY_MS: u32 = 1500;

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Generic `{success, message}` reply of the action endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActionResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Tracker features that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Tracker,
    Heartbeat,
    DailySummary,
}

impl Feature {
    pub const ALL: [Self; 3] = [Self::Tracker, Self::Heartbeat, Self::DailySummary];

    /// Path segment used by `POST /api/toggle/:feature`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Tracker => "tracker",
            Self::Heartbeat => "heartbeat",
            Self::DailySummary => "daily_summary",
        }
    }

    /// Human label for the switch.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tracker => "Event tracker",
            Self::Heartbeat => "Heartbeat emails",
            Self::DailySummary => "Daily summary",
        }
    }

    /// Current value of this feature in a settings snapshot.
    #[must_use]
    pub fn is_enabled(self, settings: &Settings) -> bool {
        match self {
            Self::Tracker => settings.tracker_enabled,
            Self::Heartbeat => settings.heartbeat_enabled,
            Self::DailySummary => settings.daily_summary_enabled,
        }
    }
}

/// A password-gated POST waiting for the admin to type the password.
#[derive(Debug, Clone, PartialEq)]
pub struct SecureAction {
    endpoint: String,
    fields: Map<String, Value>,
    success_message: String,
}

impl SecureAction {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, success_message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            fields: Map::new(),
            success_message: success_message.into(),
        }
    }

    /// Add an extra JSON field sent alongside the password.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn toggle_feature(feature: Feature) -> Self {
        Self::new(
            format!("/api/toggle/{}", feature.slug()),
            format!("{} toggled!", feature.slug()),
        )
    }

    #[must_use]
    pub fn toggle_recipient(email: &str) -> Self {
        Self::new(
            format!("/api/toggle-recipient/{}", encode_component(email)),
            "Recipient toggled!",
        )
    }

    #[must_use]
    pub fn save_settings(settings: &Settings) -> Self {
        Self::new("/api/settings", "Settings saved successfully!")
            .with_field("heartbeat_enabled", settings.heartbeat_enabled)
            .with_field("daily_summary_enabled", settings.daily_summary_enabled)
            .with_field("tracker_enabled", settings.tracker_enabled)
    }

    #[must_use]
    pub fn check_now() -> Self {
        Self::new("/api/check-now", "Check triggered!")
    }

    #[must_use]
    pub fn send_heartbeat() -> Self {
        Self::new("/api/send-heartbeat", "Heartbeat sent!")
    }

    #[must_use]
    pub fn send_daily_summary() -> Self {
        Self::new("/api/send-daily-summary", "Daily summary sent!")
    }

    #[must_use]
    pub fn test_all_emails() -> Self {
        Self::new("/api/test-all-emails", "Test emails sent!")
    }

    #[must_use]
    pub fn clear_logs() -> Self {
        Self::new("/api/clear-logs", "Logs cleared!")
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// JSON body: the extra fields plus `password`.
    #[must_use]
    pub fn body(&self, password: &str) -> Value {
        let mut body = self.fields.clone();
        body.insert("password".to_string(), Value::String(password.to_string()));
        Value::Object(body)
    }
}

/// What the UI does with a dialog after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Keep the dialog open and show an inline error.
    Retry(String),
    /// Close the dialog, flash a toast and optionally reload the page after
    /// the given delay in milliseconds.
    Close {
        toast: Toast,
        reload_after_ms: Option<u32>,
    },
    /// Keep the dialog open and flash a toast.
    Notify(Toast),
}

impl Resolution {
    /// Whether the dialog should close.
    #[must_use]
    pub fn closes(&self) -> bool {
        matches!(self, Self::Close { .. })
    }

    fn close(toast: Toast) -> Self {
        Self::Close {
            toast,
            reload_after_ms: None,
        }
    }
}

/// Map the reply to a secure action submission onto a UI decision.
#[must_use]
pub fn resolve_secure_action(
    action: &SecureAction,
    reply: Result<ActionResponse, ApiError>,
) -> Resolution {
    match reply {
        Ok(ActionResponse {
            success: true,
            message,
        }) => Resolution::Close {
            toast: Toast::success(message.unwrap_or_else(|| action.success_message.clone())),
            reload_after_ms: Some(RELOAD_DELAY_MS),
        },
        Ok(ActionResponse {
            success: false,
            message,
        })
        | Err(ApiError::Status { message, .. }) => {
            Resolution::close(Toast::error(message.unwrap_or_else(|| ACTION_FAILED.to_string())))
        }
        Err(ApiError::Unauthorized) => Resolution::Retry(INVALID_PASSWORD.to_string()),
        Err(ApiError::RateLimited) => Resolution::close(Toast::rate_limited()),
        Err(ApiError::Transport(_)) => Resolution::close(Toast::network_error()),
    }
}

/// The password prompt shared by every secure action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordModal {
    pending: Option<SecureAction>,
    error: Option<String>,
}

impl PasswordModal {
    /// Show the modal for `action`, replacing anything pending.
    pub fn open(&mut self, action: SecureAction) {
        self.pending = Some(action);
        self.error = None;
    }

    /// Dismiss the modal and forget the pending action.
    pub fn close(&mut self) {
        self.pending = None;
        self.error = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&SecureAction> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply the outcome of a submission.
    ///
    /// A retry on a modal dismissed while the request was in flight does not
    /// reopen it.
    pub fn apply(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Retry(message) => {
                if self.is_open() {
                    self.error = Some(message.clone());
                }
            }
            Resolution::Close { .. } => self.close(),
            Resolution::Notify(_) => {}
        }
    }
}
