//! Notification service: poll for new events and raise browser notifications.

use trackerdash_domain::notification::{
    BrowserNotification, NotificationWatermark, PermissionState,
};
use trackerdash_domain::time::Timestamp;

use crate::ports::{DashboardApi, Notifier};

/// Polls `/api/notification-check` and shows one notification per new event.
pub struct NotificationService<A, N> {
    api: A,
    notifier: N,
    app_title: String,
}

impl<A: DashboardApi, N: Notifier> NotificationService<A, N> {
    /// Create a new service. `app_title` is used in notification titles.
    pub fn new(api: A, notifier: N, app_title: impl Into<String>) -> Self {
        Self {
            api,
            notifier,
            app_title: app_title.into(),
        }
    }

    /// Current browser permission.
    pub fn permission(&self) -> PermissionState {
        self.notifier.permission()
    }

    /// Show the one-off confirmation after notifications are switched on.
    pub fn confirm_enabled(&self) {
        if self.notifier.permission() == PermissionState::Granted {
            self.notifier
                .show(&BrowserNotification::confirmation(&self.app_title));
        }
    }

    /// Ask the server for events found since `watermark` and show them.
    ///
    /// Skipped without a request unless permission is granted. On failure the
    /// watermark stays put so the next poll asks for the same window.
    /// Returns the number of notifications shown.
    pub async fn poll(&self, watermark: &mut NotificationWatermark, now: Timestamp) -> usize {
        if self.notifier.permission() != PermissionState::Granted {
            return 0;
        }

        let check = match self.api.notification_check(watermark.since()).await {
            Ok(check) => check,
            Err(err) => {
                tracing::warn!(error = %err, "notification check failed");
                return 0;
            }
        };

        let notifications = check.notifications(&self.app_title);
        for notification in &notifications {
            self.notifier.show(notification);
        }
        if !notifications.is_empty() {
            tracing::info!(count = notifications.len(), "new events notified");
        }
        watermark.advance(&check, now);
        notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi, FakeNotifier};
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use trackerdash_domain::error::ApiError;
    use trackerdash_domain::notification::{NewEvent, NotificationCheck};

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_714_557_600 + secs, 0).unwrap()
    }

    fn check_with_two_events() -> NotificationCheck {
        NotificationCheck {
            count: 2,
            new_events: vec![
                NewEvent {
                    id: "7".to_string(),
                    title: "Spring Market".to_string(),
                },
                NewEvent {
                    id: "8".to_string(),
                    title: "Night Market".to_string(),
                },
            ],
            last_check: Some("2024-05-01T10:00:30+00:00".to_string()),
        }
    }

    #[tokio::test]
    async fn should_show_one_notification_per_event() {
        let svc = NotificationService::new(
            FakeApi {
                notification_check: Ok(check_with_two_events()),
                ..FakeApi::default()
            },
            FakeNotifier::granted(),
            "Flea Market Tracker",
        );
        let mut watermark = NotificationWatermark::starting_at(at(0));

        let shown = svc.poll(&mut watermark, at(60)).await;

        assert_eq!(shown, 2);
        let notes = svc.notifier.shown.borrow();
        assert_eq!(notes[0].body, "Spring Market");
        assert_eq!(notes[1].tag.as_deref(), Some("event-8"));
        assert_eq!(watermark.since(), "2024-05-01T10:00:30+00:00");
        assert_eq!(
            svc.api.calls(),
            vec![Call::NotificationCheck {
                since: "2024-05-01T10:00:00.000Z".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn should_keep_watermark_on_failure() {
        let svc = NotificationService::new(
            FakeApi {
                notification_check: Err(ApiError::Transport("offline".to_string())),
                ..FakeApi::default()
            },
            FakeNotifier::granted(),
            "Tracker",
        );
        let mut watermark = NotificationWatermark::starting_at(at(0));

        assert_eq!(svc.poll(&mut watermark, at(30)).await, 0);
        assert_eq!(watermark.since(), "2024-05-01T10:00:00.000Z");
    }

    #[tokio::test]
    async fn should_not_poll_without_permission() {
        let svc = NotificationService::new(
            FakeApi::default(),
            FakeNotifier {
                permission: PermissionState::Denied,
                shown: RefCell::new(Vec::new()),
            },
            "Tracker",
        );
        let mut watermark = NotificationWatermark::starting_at(at(0));

        assert_eq!(svc.poll(&mut watermark, at(30)).await, 0);
        assert!(svc.api.calls().is_empty());
    }

    #[tokio::test]
    async fn should_advance_without_showing_when_nothing_new() {
        let svc = NotificationService::new(
            FakeApi {
                notification_check: Ok(NotificationCheck::default()),
                ..FakeApi::default()
            },
            FakeNotifier::granted(),
            "Tracker",
        );
        let mut watermark = NotificationWatermark::starting_at(at(0));

        assert_eq!(svc.poll(&mut watermark, at(30)).await, 0);
        assert!(svc.notifier.shown.borrow().is_empty());
        assert_eq!(watermark.since(), "2024-05-01T10:00:30.000Z");
    }

    #[test]
    fn should_confirm_only_when_granted() {
        let svc = NotificationService::new(FakeApi::default(), FakeNotifier::granted(), "Tracker");
        svc.confirm_enabled();
        assert_eq!(svc.notifier.shown.borrow().len(), 1);
    }
}
