//! Thin wrappers over the browser APIs the dashboard touches directly:
//! page reload, theme attributes and desktop notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use trackerdash_app::ports::Notifier;
use trackerdash_domain::notification::{BrowserNotification, PermissionState};
use trackerdash_domain::preferences::Theme;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

use crate::error::BrowserError;

fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

fn document() -> Result<web_sys::Document, BrowserError> {
    window()?.document().ok_or(BrowserError::NoDocument)
}

/// Reload the page after `delay_ms`, so server-rendered state catches up.
pub fn reload_after(delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Err(err) = window().and_then(|w| w.location().reload().map_err(BrowserError::from)) {
            tracing::warn!(error = %err, "page reload failed");
        }
    });
}

/// Set `data-theme` on `<html>` and the `theme-<name>` class on `<body>`.
pub fn apply_theme(theme: Theme) {
    if let Err(err) = try_apply_theme(theme) {
        tracing::warn!(error = %err, "failed to apply theme");
    }
}

fn try_apply_theme(theme: Theme) -> Result<(), BrowserError> {
    let document = document()?;
    if let Some(root) = document.document_element() {
        let root = root.unchecked_into::<web_sys::HtmlElement>();
        root.dataset().set("theme", theme.as_str())?;
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        classes.remove_2("theme-dark", "theme-light")?;
        classes.add_1(&format!("theme-{}", theme.as_str()))?;
    }
    Ok(())
}

fn notifications_supported() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("Notification")).unwrap_or(false))
        .unwrap_or(false)
}

fn map_permission(permission: NotificationPermission) -> PermissionState {
    match permission {
        NotificationPermission::Granted => PermissionState::Granted,
        NotificationPermission::Denied => PermissionState::Denied,
        _ => PermissionState::Prompt,
    }
}

/// Current notification capability and permission.
#[must_use]
pub fn notification_permission() -> PermissionState {
    if notifications_supported() {
        map_permission(Notification::permission())
    } else {
        PermissionState::Unsupported
    }
}

/// Ask the user for notification permission and return the answer.
///
/// # Errors
///
/// Returns an error if the permission prompt could not be shown.
pub async fn request_notification_permission() -> Result<PermissionState, BrowserError> {
    if !notifications_supported() {
        return Ok(PermissionState::Unsupported);
    }
    let answer = JsFuture::from(Notification::request_permission()?).await?;
    Ok(match answer.as_string().as_deref() {
        Some("granted") => PermissionState::Granted,
        Some("denied") => PermissionState::Denied,
        _ => PermissionState::Prompt,
    })
}

/// [`Notifier`] backed by the Web Notifications API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn permission(&self) -> PermissionState {
        notification_permission()
    }

    fn show(&self, notification: &BrowserNotification) {
        let options = NotificationOptions::new();
        options.set_body(&notification.body);
        if let Some(tag) = &notification.tag {
            options.set_tag(tag);
        }
        if let Err(err) = Notification::new_with_options(&notification.title, &options) {
            tracing::warn!(error = %BrowserError::from(err), "failed to show notification");
        }
    }
}
