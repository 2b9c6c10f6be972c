//! Common error types used across the workspace.

/// Failure of a call to the Status/Action API.
///
/// Each variant maps to one user-facing behaviour: re-prompt, back off, show
/// the server's explanation, or report a generic network error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: the admin password was rejected.
    #[error("invalid password")]
    Unauthorized,

    /// HTTP 429: the server is rate limiting this client.
    #[error("too many requests")]
    RateLimited,

    /// Any other non-2xx response, with the server-provided message if the
    /// body carried one.
    #[error("HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The request never completed or the body was not the expected JSON.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Build the error for a non-2xx HTTP status.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            _ => Self::Status { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_401_to_unauthorized() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
    }

    #[test]
    fn should_map_429_to_rate_limited() {
        assert_eq!(
            ApiError::from_status(429, Some("slow down".to_string())),
            ApiError::RateLimited
        );
    }

    #[test]
    fn should_keep_message_for_other_statuses() {
        let err = ApiError::from_status(500, Some("boom".to_string()));
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: Some("boom".to_string())
            }
        );
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
