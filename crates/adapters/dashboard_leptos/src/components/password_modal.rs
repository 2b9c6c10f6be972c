//! Shared password prompt for every secure action.

use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_app::services::action_service::ActionService;

use crate::components::use_toasts;
use crate::context::use_dashboard;
use crate::error::BrowserError;

/// Modal asking for the admin password before a pending secure action is
/// sent. Hidden while nothing is pending.
#[component]
pub fn PasswordModal() -> impl IntoView {
    let dashboard = use_dashboard();
    let toasts = use_toasts();
    let open = dashboard.select(|s| s.password_modal.is_open());
    let error = dashboard.select(|s| s.password_modal.error().map(str::to_string));
    let password = RwSignal::new(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // A freshly opened prompt starts empty and focused.
    Effect::new(move |_| {
        if open.get() {
            password.set(String::new());
            request_animation_frame(move || {
                if let Some(input) = input_ref.get_untracked()
                    && let Err(err) = input.focus()
                {
                    tracing::debug!(error = %BrowserError::from(err), "could not focus password input");
                }
            });
        }
    });

    let submit = move || {
        let Some(action) = dashboard
            .state
            .with_untracked(|s| s.password_modal.pending().cloned())
        else {
            return;
        };
        let typed = password.get_untracked();
        spawn_local(async move {
            let resolution = ActionService::new(dashboard.api).submit(&action, &typed).await;
            dashboard
                .state
                .update(|s| s.password_modal.apply(&resolution));
            toasts.settle(&resolution);
        });
    };
    let cancel = move || dashboard.state.update(|s| s.password_modal.close());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| cancel()></div>
            <div class="modal" role="dialog" aria-modal="true">
                <h3>
                    <i class="bi bi-shield-lock"></i>
                    " Enter password"
                </h3>
                <input
                    type="password"
                    class="form-control"
                    placeholder="Admin password"
                    node_ref=input_ref
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                        "Enter" => submit(),
                        "Escape" => cancel(),
                        _ => {}
                    }
                />
                <Show when=move || error.get().is_some()>
                    <p class="modal-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| submit()>
                        "Confirm"
                    </button>
                </div>
            </div>
        </Show>
    }
}
