//! Status/Action API port: every HTTP call the dashboard makes.

use std::future::Future;

use serde_json::Value;
use trackerdash_domain::action::ActionResponse;
use trackerdash_domain::console::ConsoleSnapshot;
use trackerdash_domain::error::ApiError;
use trackerdash_domain::events::LiveEventsResponse;
use trackerdash_domain::notification::NotificationCheck;
use trackerdash_domain::preferences::PreferenceUpdate;
use trackerdash_domain::reveal::{RevealRequest, RevealResponse};
use trackerdash_domain::stats::StatsResponse;
use trackerdash_domain::status::StatusResponse;

/// Client for the Status/Action API.
///
/// Implementations map HTTP 401 to [`ApiError::Unauthorized`], 429 to
/// [`ApiError::RateLimited`], other non-2xx statuses to [`ApiError::Status`]
/// and network or decoding failures to [`ApiError::Transport`].
pub trait DashboardApi {
    /// `GET /api/status`.
    fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>>;

    /// `GET /api/console`.
    fn console(&self) -> impl Future<Output = Result<ConsoleSnapshot, ApiError>>;

    /// `GET /api/stats`.
    fn stats(&self) -> impl Future<Output = Result<StatsResponse, ApiError>>;

    /// `GET /api/live-events`.
    fn live_events(&self) -> impl Future<Output = Result<LiveEventsResponse, ApiError>>;

    /// `POST` a JSON body to a password-gated endpoint.
    fn post_action(
        &self,
        endpoint: &str,
        body: Value,
    ) -> impl Future<Output = Result<ActionResponse, ApiError>>;

    /// `POST /api/reveal-email`.
    fn reveal_email(
        &self,
        request: RevealRequest,
    ) -> impl Future<Output = Result<RevealResponse, ApiError>>;

    /// `POST /api/theme`; the reply body is ignored.
    fn save_preference(
        &self,
        update: PreferenceUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/notification-check?since=<since>`.
    fn notification_check(
        &self,
        since: &str,
    ) -> impl Future<Output = Result<NotificationCheck, ApiError>>;
}
