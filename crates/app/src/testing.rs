//! In-memory port implementations shared by the service tests.

use std::cell::RefCell;
use std::future::Future;

use serde_json::Value;
use trackerdash_domain::action::ActionResponse;
use trackerdash_domain::console::ConsoleSnapshot;
use trackerdash_domain::error::ApiError;
use trackerdash_domain::events::LiveEventsResponse;
use trackerdash_domain::notification::{BrowserNotification, NotificationCheck, PermissionState};
use trackerdash_domain::preferences::PreferenceUpdate;
use trackerdash_domain::reveal::{RevealRequest, RevealResponse};
use trackerdash_domain::stats::StatsResponse;
use trackerdash_domain::status::StatusResponse;

use crate::ports::{DashboardApi, Notifier};

/// A recorded call to the fake API.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Status,
    Console,
    Stats,
    LiveEvents,
    Action { endpoint: String, body: Value },
    Reveal(RevealRequest),
    Preference(PreferenceUpdate),
    NotificationCheck { since: String },
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("unscripted".to_string()))
}

/// Scripted replies plus a log of every call made.
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub status: Result<StatusResponse, ApiError>,
    pub console: Result<ConsoleSnapshot, ApiError>,
    pub stats: Result<StatsResponse, ApiError>,
    pub live_events: Result<LiveEventsResponse, ApiError>,
    pub action: Result<ActionResponse, ApiError>,
    pub reveal: Result<RevealResponse, ApiError>,
    pub preference: Result<(), ApiError>,
    pub notification_check: Result<NotificationCheck, ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            status: unscripted(),
            console: unscripted(),
            stats: unscripted(),
            live_events: unscripted(),
            action: unscripted(),
            reveal: unscripted(),
            preference: Ok(()),
            notification_check: unscripted(),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl DashboardApi for FakeApi {
    fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>> {
        self.record(Call::Status);
        let reply = self.status.clone();
        async move { reply }
    }

    fn console(&self) -> impl Future<Output = Result<ConsoleSnapshot, ApiError>> {
        self.record(Call::Console);
        let reply = self.console.clone();
        async move { reply }
    }

    fn stats(&self) -> impl Future<Output = Result<StatsResponse, ApiError>> {
        self.record(Call::Stats);
        let reply = self.stats.clone();
        async move { reply }
    }

    fn live_events(&self) -> impl Future<Output = Result<LiveEventsResponse, ApiError>> {
        self.record(Call::LiveEvents);
        let reply = self.live_events.clone();
        async move { reply }
    }

    fn post_action(
        &self,
        endpoint: &str,
        body: Value,
    ) -> impl Future<Output = Result<ActionResponse, ApiError>> {
        self.record(Call::Action {
            endpoint: endpoint.to_string(),
            body,
        });
        let reply = self.action.clone();
        async move { reply }
    }

    fn reveal_email(
        &self,
        request: RevealRequest,
    ) -> impl Future<Output = Result<RevealResponse, ApiError>> {
        self.record(Call::Reveal(request));
        let reply = self.reveal.clone();
        async move { reply }
    }

    fn save_preference(
        &self,
        update: PreferenceUpdate,
    ) -> impl Future<Output = Result<(), ApiError>> {
        self.record(Call::Preference(update));
        let reply = self.preference.clone();
        async move { reply }
    }

    fn notification_check(
        &self,
        since: &str,
    ) -> impl Future<Output = Result<NotificationCheck, ApiError>> {
        self.record(Call::NotificationCheck {
            since: since.to_string(),
        });
        let reply = self.notification_check.clone();
        async move { reply }
    }
}

/// Collects shown notifications.
pub struct FakeNotifier {
    pub permission: PermissionState,
    pub shown: RefCell<Vec<BrowserNotification>>,
}

impl FakeNotifier {
    pub fn granted() -> Self {
        Self {
            permission: PermissionState::Granted,
            shown: RefCell::new(Vec::new()),
        }
    }
}

impl Notifier for FakeNotifier {
    fn permission(&self) -> PermissionState {
        self.permission
    }

    fn show(&self, notification: &BrowserNotification) {
        self.shown.borrow_mut().push(notification.clone());
    }
}
