//! Timer service: resynchronise the countdowns from the server.

use trackerdash_domain::status::StatusResponse;

use crate::ports::DashboardApi;

/// Fetches the authoritative schedule used to correct client-side drift.
pub struct TimerService<A> {
    api: A,
}

impl<A: DashboardApi> TimerService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch `/api/status`.
    ///
    /// Returns `None` when the request fails; the caller keeps its current
    /// countdown and totals.
    pub async fn refresh(&self) -> Option<StatusResponse> {
        match self.api.status().await {
            Ok(status) => {
                tracing::debug!(
                    next_check = ?status.next_check_seconds,
                    next_heartbeat = ?status.next_heartbeat_seconds,
                    "timers refreshed from server"
                );
                Some(status)
            }
            Err(err) => {
                tracing::warn!(error = %err, "status refresh failed");
                None
            }
        }
    }
}
