//! Password prompt that unmasks one recipient address.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_app::services::reveal_service::RevealService;
use trackerdash_domain::reveal::RevealResolution;

use crate::components::use_toasts;
use crate::context::use_dashboard;

#[component]
pub fn RevealModal() -> impl IntoView {
    let dashboard = use_dashboard();
    let toasts = use_toasts();
    let masked = dashboard.select(|s| s.reveal_modal.pending_masked().map(str::to_string));
    let error = dashboard.select(|s| s.reveal_modal.error().map(str::to_string));
    let password = RwSignal::new(String::new());

    Effect::new(move |_| {
        if masked.with(Option::is_some) {
            password.set(String::new());
        }
    });

    let submit = move || {
        let Some(target) = masked.get_untracked() else {
            return;
        };
        let typed = password.get_untracked();
        spawn_local(async move {
            let resolution = RevealService::new(dashboard.api).reveal(&target, &typed).await;
            dashboard.state.update(|s| s.apply_reveal(&resolution));
            if let RevealResolution::Close(toast) = resolution {
                toasts.push(toast);
            }
        });
    };
    let cancel = move || dashboard.state.update(|s| s.reveal_modal.close());

    view! {
        <Show when=move || masked.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| cancel()></div>
            <div class="modal" role="dialog" aria-modal="true">
                <h3>
                    <i class="bi bi-eye"></i>
                    " Reveal email"
                </h3>
                <p class="text-muted">{move || masked.get().unwrap_or_default()}</p>
                <input
                    type="password"
                    class="form-control"
                    placeholder="Admin password"
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
                        "Reveal"
                    </button>
                </div>
            </div>
        </Show>
    }
}
