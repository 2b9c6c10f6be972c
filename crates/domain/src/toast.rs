//! Transient, non-blocking user feedback.

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// CSS class suffix for the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Bootstrap icon name shown next to the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "x-circle",
            Self::Warning => "exclamation-triangle",
        }
    }
}

/// A message to flash at the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Warning,
            text: text.into(),
        }
    }

    /// The generic failure shown for transport and parse errors.
    #[must_use]
    pub fn network_error() -> Self {
        Self::error("Network error")
    }

    /// The warning shown when the server rate limits us.
    #[must_use]
    pub fn rate_limited() -> Self {
        Self::warning("Too many requests. Please wait.")
    }
}
