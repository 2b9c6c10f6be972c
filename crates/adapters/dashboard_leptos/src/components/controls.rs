//! Feature switches and one-shot admin actions.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use trackerdash_domain::action::{Feature, SecureAction};
use trackerdash_domain::dialog::TestDialog;

use crate::context::{Dashboard, use_dashboard};

fn ask_password(dashboard: Dashboard, action: SecureAction) {
    dashboard.state.update(|s| s.password_modal.open(action));
}

fn feature_switch(dashboard: Dashboard, feature: Feature) -> impl IntoView {
    let enabled = dashboard.page(|p| feature.is_enabled(&p.settings));
    // The switch only reflects the server; a successful toggle reloads the page.
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        ask_password(dashboard, SecureAction::toggle_feature(feature));
    };
    view! {
        <label class="form-check form-switch">
            <input type="checkbox" class="form-check-input" prop:checked=enabled on:click=on_click/>
            <span class="form-check-label">{feature.label()}</span>
        </label>
    }
}

#[component]
fn ActionButton(
    #[prop(into)] label: String,
    icon: &'static str,
    action: SecureAction,
) -> impl IntoView {
    let dashboard = use_dashboard();
    let action = StoredValue::new(action);
    view! {
        <button
            class="btn btn-outline"
            on:click=move |_| ask_password(dashboard, action.get_value())
        >
            <i class=format!("bi bi-{icon}")></i>
            " "
            {label}
        </button>
    }
}

#[component]
pub fn Controls() -> impl IntoView {
    let dashboard = use_dashboard();

    view! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-sliders"></i>
                    " Controls"
                </h2>
                <button
                    class="btn btn-sm btn-secondary"
                    title="Settings"
                    on:click=move |_| dashboard.settings_open.set(true)
                >
                    <i class="bi bi-gear"></i>
                </button>
            </div>
            <div class="feature-switches">
                {Feature::ALL.into_iter().map(|f| feature_switch(dashboard, f)).collect_view()}
            </div>
            <div class="action-buttons">
                <ActionButton label="Check now" icon="arrow-repeat" action=SecureAction::check_now()/>
                <ActionButton
                    label="Send heartbeat"
                    icon="heart-pulse"
                    action=SecureAction::send_heartbeat()
                />
                <ActionButton
                    label="Send daily summary"
                    icon="calendar-check"
                    action=SecureAction::send_daily_summary()
                />
                <ActionButton
                    label="Test all emails"
                    icon="envelope"
                    action=SecureAction::test_all_emails()
                />
                <button
                    class="btn btn-outline"
                    on:click=move |_| dashboard.state.update(|s| s.test_dialog.open(TestDialog::NewEvent))
                >
                    <i class="bi bi-bell"></i>
                    " Test new event"
                </button>
            </div>
        </section>
    }
}
