//! Notifier port: desktop notifications.

use trackerdash_domain::notification::{BrowserNotification, PermissionState};

/// Shows desktop notifications on behalf of the dashboard.
pub trait Notifier {
    /// Current capability and permission.
    fn permission(&self) -> PermissionState;

    /// Display one notification. Failures are the implementation's to log.
    fn show(&self, notification: &BrowserNotification);
}
