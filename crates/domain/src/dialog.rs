//! Test-email dialogs: send a test to one recipient, or simulate a new event
//! end-to-end. Unlike secure actions, failures stay inside the dialog.

use serde_json::{Value, json};

use crate::action::{ActionResponse, Resolution};
use crate::error::ApiError;
use crate::toast::Toast;

/// Which test dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDialog {
    /// `POST /api/test-single-email {email, password}`.
    SingleEmail,
    /// `POST /api/test-new-event {password}`.
    NewEvent,
}

impl TestDialog {
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::SingleEmail => "/api/test-single-email",
            Self::NewEvent => "/api/test-new-event",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SingleEmail => "Send test email",
            Self::NewEvent => "Simulate new event",
        }
    }

    /// Inline error for an empty password field.
    #[must_use]
    pub fn empty_password_message(self) -> &'static str {
        match self {
            Self::SingleEmail => "Please enter password",
            Self::NewEvent => "Please enter admin password",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::SingleEmail => "Failed to send",
            Self::NewEvent => "Failed to trigger test",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            Self::SingleEmail => "Test email sent",
            Self::NewEvent => "Test event triggered",
        }
    }

    /// A simulated event changes server-rendered state, so reload to show it.
    #[must_use]
    pub fn reload_after_ms(self) -> Option<u32> {
        match self {
            Self::SingleEmail => None,
            Self::NewEvent => Some(2000),
        }
    }

    /// Request body; `email` is only sent for the single-email test.
    #[must_use]
    pub fn body(self, password: &str, email: Option<&str>) -> Value {
        match self {
            Self::SingleEmail => json!({
                "email": email.unwrap_or_default(),
                "password": password,
            }),
            Self::NewEvent => json!({ "password": password }),
        }
    }
}

/// Map a test dialog reply onto a UI decision.
#[must_use]
pub fn resolve_test_dialog(
    dialog: TestDialog,
    reply: Result<ActionResponse, ApiError>,
) -> Resolution {
    match reply {
        Ok(ActionResponse {
            success: true,
            message,
        }) => Resolution::Close {
            toast: Toast::success(message.unwrap_or_else(|| dialog.success_message().to_string())),
            reload_after_ms: dialog.reload_after_ms(),
        },
        Ok(ActionResponse {
            success: false,
            message,
        })
        | Err(ApiError::Status { message, .. }) => {
            Resolution::Retry(message.unwrap_or_else(|| dialog.failure_message().to_string()))
        }
        Err(ApiError::Unauthorized) => Resolution::Retry("Invalid password".to_string()),
        Err(ApiError::RateLimited) => Resolution::Close {
            toast: Toast::rate_limited(),
            reload_after_ms: None,
        },
        Err(ApiError::Transport(_)) => Resolution::Notify(Toast::network_error()),
    }
}

/// Open/closed state of the test dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestDialogState {
    open: Option<TestDialog>,
    error: Option<String>,
}

impl TestDialogState {
    pub fn open(&mut self, dialog: TestDialog) {
        self.open = Some(dialog);
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = None;
        self.error = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<TestDialog> {
        self.open
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn apply(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Retry(message) => {
                if self.open.is_some() {
                    self.error = Some(message.clone());
                }
            }
            Resolution::Close { .. } => self.close(),
            Resolution::Notify(_) => {}
        }
    }
}
