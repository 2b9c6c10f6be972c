//! Preference service: persist theme and notification choices.

use trackerdash_domain::preferences::PreferenceUpdate;

use crate::ports::DashboardApi;

/// Fire-and-forget persistence of UI preferences.
pub struct PreferenceService<A> {
    api: A,
}

impl<A: DashboardApi> PreferenceService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Save `update`. The local UI has already switched; a failure is only
    /// logged.
    pub async fn save(&self, update: PreferenceUpdate) {
        match self.api.save_preference(update).await {
            Ok(()) => tracing::debug!(?update, "preference saved"),
            Err(err) => tracing::warn!(?update, error = %err, "failed to save preference"),
        }
    }
}
