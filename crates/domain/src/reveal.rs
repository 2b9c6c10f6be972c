//! Exchanging a masked recipient address for the real one.

use serde::{Deserialize, Serialize};

use crate::action::INVALID_PASSWORD;
use crate::error::ApiError;
use crate::toast::Toast;

/// Inline error when the server refused without an auth failure.
pub const REVEAL_FAILED: &str = "Failed to reveal email";

/// Body of `POST /api/reveal-email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealRequest {
    pub masked: String,
    pub password: String,
}

/// Reply of `POST /api/reveal-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealResponse {
    pub success: bool,
    pub email: Option<String>,
}

/// What the UI does after a reveal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealResolution {
    /// Show `email` in place of `masked` and close the modal.
    Revealed { masked: String, email: String },
    /// Keep the modal open with an inline error.
    Retry(String),
    /// Close the modal and flash a toast.
    Close(Toast),
}

/// Map a reveal reply onto a UI decision.
#[must_use]
pub fn resolve_reveal(masked: &str, reply: Result<RevealResponse, ApiError>) -> RevealResolution {
    match reply {
        Ok(RevealResponse {
            success: true,
            email: Some(email),
        }) => RevealResolution::Revealed {
            masked: masked.to_string(),
            email,
        },
        Ok(_) | Err(ApiError::Status { .. }) => RevealResolution::Retry(REVEAL_FAILED.to_string()),
        Err(ApiError::Unauthorized) => RevealResolution::Retry(INVALID_PASSWORD.to_string()),
        Err(ApiError::RateLimited) => RevealResolution::Close(Toast::rate_limited()),
        Err(ApiError::Transport(_)) => RevealResolution::Close(Toast::network_error()),
    }
}

/// The password prompt for revealing one masked email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealModal {
    pending_masked: Option<String>,
    error: Option<String>,
}

impl RevealModal {
    pub fn open(&mut self, masked: impl Into<String>) {
        self.pending_masked = Some(masked.into());
        self.error = None;
    }

    pub fn close(&mut self) {
        self.pending_masked = None;
        self.error = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending_masked.is_some()
    }

    #[must_use]
    pub fn pending_masked(&self) -> Option<&str> {
        self.pending_masked.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show an inline error without closing.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.is_open() {
            self.error = Some(message.into());
        }
    }

    pub fn apply(&mut self, resolution: &RevealResolution) {
        match resolution {
            RevealResolution::Retry(message) => self.fail(message.clone()),
            RevealResolution::Revealed { .. } | RevealResolution::Close(_) => self.close(),
        }
    }
}
