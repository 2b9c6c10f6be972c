//! Settings panel: three feature switches saved through the password prompt.

use leptos::prelude::*;
use trackerdash_domain::action::SecureAction;
use trackerdash_domain::preferences::Settings;

use crate::context::use_dashboard;

#[component]
fn SettingSwitch(
    #[prop(into)] label: String,
    checked: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-check form-switch">
            <input
                type="checkbox"
                class="form-check-input"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="form-check-label">{label}</span>
        </label>
    }
}

/// Modal with the persisted settings. Saving closes the panel and asks for
/// the password.
#[component]
pub fn SettingsModal() -> impl IntoView {
    let dashboard = use_dashboard();
    let initial = dashboard.page(|p| p.settings);
    let heartbeat = RwSignal::new(initial.heartbeat_enabled);
    let daily_summary = RwSignal::new(initial.daily_summary_enabled);
    let tracker = RwSignal::new(initial.tracker_enabled);

    let save = move |_| {
        let settings = Settings {
            heartbeat_enabled: heartbeat.get_untracked(),
            daily_summary_enabled: daily_summary.get_untracked(),
            tracker_enabled: tracker.get_untracked(),
        };
        dashboard.settings_open.set(false);
        dashboard
            .state
            .update(|s| s.password_modal.open(SecureAction::save_settings(&settings)));
    };

    view! {
        <Show when=move || dashboard.settings_open.get()>
            <div class="modal-backdrop" on:click=move |_| dashboard.settings_open.set(false)></div>
            <div class="modal" role="dialog" aria-modal="true">
                <h3>
                    <i class="bi bi-gear"></i>
                    " Settings"
                </h3>
                <SettingSwitch label="Hourly heartbeat email" checked=heartbeat/>
                <SettingSwitch label="Daily summary email" checked=daily_summary/>
                <SettingSwitch label="Event tracker" checked=tracker/>
                <div class="modal-actions">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| dashboard.settings_open.set(false)
                    >
                        "Cancel"
                    </button>
                    <button class="btn btn-primary" on:click=save>
                        "Save"
                    </button>
                </div>
            </div>
        </Show>
    }
}
