//! Reveal service: exchange a masked email for the real address.

use trackerdash_domain::action::EMPTY_PASSWORD;
use trackerdash_domain::reveal::{RevealRequest, RevealResolution, resolve_reveal};

use crate::ports::DashboardApi;

/// Asks the server to unmask one recipient address.
pub struct RevealService<A> {
    api: A,
}

impl<A: DashboardApi> RevealService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Reveal `masked` using `password`. An empty password is rejected
    /// locally.
    pub async fn reveal(&self, masked: &str, password: &str) -> RevealResolution {
        if password.is_empty() {
            return RevealResolution::Retry(EMPTY_PASSWORD.to_string());
        }

        let reply = self
            .api
            .reveal_email(RevealRequest {
                masked: masked.to_string(),
                password: password.to_string(),
            })
            .await;
        if let Err(err) = &reply {
            tracing::warn!(error = %err, "email reveal failed");
        }
        resolve_reveal(masked, reply)
    }
}
