//! Test-email dialogs: one recipient, or a simulated new event.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_app::services::action_service::ActionService;
use trackerdash_domain::dialog::TestDialog;

use crate::components::use_toasts;
use crate::context::use_dashboard;

/// Whichever test dialog is open. Failures other than rate limiting keep the
/// dialog open with an inline message.
#[component]
pub fn TestDialogModal() -> impl IntoView {
    let dashboard = use_dashboard();
    let toasts = use_toasts();
    let current = dashboard.select(|s| s.test_dialog.current());
    let error = dashboard.select(|s| s.test_dialog.error().map(str::to_string));
    let recipients = dashboard.page(|p| p.recipients.clone());
    let first_email = recipients.first().map(|r| r.email.clone()).unwrap_or_default();
    let email = RwSignal::new(first_email);
    let password = RwSignal::new(String::new());
    let options = StoredValue::new(recipients);

    Effect::new(move |_| {
        if current.get().is_some() {
            password.set(String::new());
        }
    });

    let submit = move |_| {
        let Some(dialog) = current.get_untracked() else {
            return;
        };
        let typed = password.get_untracked();
        let selected = email.get_untracked();
        spawn_local(async move {
            let target = (dialog == TestDialog::SingleEmail).then_some(selected.as_str());
            let resolution = ActionService::new(dashboard.api)
                .submit_test(dialog, &typed, target)
                .await;
            dashboard.state.update(|s| s.test_dialog.apply(&resolution));
            toasts.settle(&resolution);
        });
    };
    let close = move |_| dashboard.state.update(|s| s.test_dialog.close());

    view! {
        <Show when=move || current.get().is_some()>
            <div class="modal-backdrop" on:click=close></div>
            <div class="modal" role="dialog" aria-modal="true">
                <h3>
                    <i class="bi bi-send"></i>
                    " "
                    {move || current.get().map(TestDialog::title).unwrap_or_default()}
                </h3>
                <Show when=move || current.get() == Some(TestDialog::SingleEmail)>
                    <select
                        class="form-select"
                        prop:value=move || email.get()
                        on:change=move |ev| email.set(event_target_value(&ev))
                    >
                        {move || {
                            options
                                .with_value(|recipients| {
                                    recipients
                                        .iter()
                                        .map(|r| {
                                            let value = r.email.clone();
                                            let label = r.display().to_string();
                                            view! { <option value=value>{label}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </Show>
                <input
                    type="password"
                    class="form-control"
                    placeholder="Admin password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="modal-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=close>
                        "Cancel"
                    </button>
                    <button class="btn btn-primary" on:click=submit>
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
