//! Event service: events currently live on the tracked site.

use trackerdash_domain::events::EventItem;

use crate::ports::DashboardApi;

/// Message shown when live events cannot be listed.
pub const LIVE_EVENTS_FAILED: &str = "Failed to fetch live events";

/// Lists live events for the searchable live list.
pub struct EventService<A> {
    api: A,
}

impl<A: DashboardApi> EventService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch `/api/live-events`.
    ///
    /// # Errors
    ///
    /// Returns the message to display when the request fails or the server
    /// could not reach the site.
    pub async fn live_events(&self) -> Result<Vec<EventItem>, String> {
        match self.api.live_events().await {
            Ok(reply) if reply.success => Ok(reply.events),
            Ok(reply) => Err(reply.message.unwrap_or_else(|| LIVE_EVENTS_FAILED.to_string())),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load live events");
                Err(LIVE_EVENTS_FAILED.to_string())
            }
        }
    }
}
