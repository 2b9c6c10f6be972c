//! Desktop notification switch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_app::services::notification_service::NotificationService;
use trackerdash_app::services::preference_service::PreferenceService;
use trackerdash_domain::notification::{DISABLED_LABEL, PermissionState};
use trackerdash_domain::preferences::PreferenceUpdate;
use trackerdash_domain::toast::Toast;

use crate::browser::{self, BrowserNotifier};
use crate::components::use_toasts;
use crate::context::{Dashboard, use_dashboard};

/// Notifications are on at page load exactly when the browser has already
/// granted permission.
fn enabled_on_load(permission: PermissionState) -> bool {
    permission == PermissionState::Granted
}

fn status_for(enabled: bool, permission: PermissionState) -> &'static str {
    if !enabled && permission == PermissionState::Granted {
        DISABLED_LABEL
    } else {
        permission.status_label()
    }
}

fn persist(dashboard: Dashboard, enabled: bool) {
    spawn_local(async move {
        PreferenceService::new(dashboard.api)
            .save(PreferenceUpdate::Notifications {
                notifications_enabled: enabled,
            })
            .await;
    });
}

#[component]
pub fn NotificationToggle() -> impl IntoView {
    let dashboard = use_dashboard();
    let toasts = use_toasts();
    let permission = browser::notification_permission();
    let on_load = enabled_on_load(permission);
    dashboard.state.update(|s| s.notifications_enabled = on_load);
    let enabled = dashboard.select(|s| s.notifications_enabled);
    let status = RwSignal::new(status_for(on_load, permission));

    let set_enabled = move |on: bool| dashboard.state.update(|s| s.notifications_enabled = on);

    let enable = move || {
        spawn_local(async move {
            let answer = match browser::notification_permission() {
                PermissionState::Prompt => match browser::request_notification_permission().await {
                    Ok(answer) => answer,
                    Err(err) => {
                        tracing::warn!(error = %err, "notification permission request failed");
                        PermissionState::Denied
                    }
                },
                current => current,
            };
            match answer {
                PermissionState::Granted => {
                    set_enabled(true);
                    status.set(answer.status_label());
                    toasts.push(Toast::success("Notifications enabled"));
                    NotificationService::new(dashboard.api, BrowserNotifier, dashboard.title())
                        .confirm_enabled();
                    persist(dashboard, true);
                }
                PermissionState::Unsupported => {
                    set_enabled(false);
                    status.set(answer.status_label());
                    toasts.push(Toast::warning("Notifications are not supported in this browser"));
                }
                PermissionState::Denied | PermissionState::Prompt => {
                    set_enabled(false);
                    status.set(PermissionState::Denied.status_label());
                    toasts.push(Toast::warning("Notification permission denied"));
                }
            }
        });
    };

    let disable = move || {
        set_enabled(false);
        status.set(DISABLED_LABEL);
        persist(dashboard, false);
    };

    view! {
        <div class="setting-row">
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=move || enabled.get()
                    on:change=move |ev| {
                        if event_target_checked(&ev) { enable() } else { disable() }
                    }
                />
                <span class="slider"></span>
            </label>
            <span class="setting-label">
                <i class="bi bi-bell"></i>
                " Desktop notifications"
            </span>
            <span class="setting-status text-muted">{move || status.get()}</span>
        </div>
    }
}
