//! Alert recipients with reveal, toggle and test actions.

use leptos::prelude::*;
use trackerdash_domain::action::SecureAction;
use trackerdash_domain::bootstrap::Recipient;
use trackerdash_domain::dialog::TestDialog;

use crate::components::EmptyState;
use crate::context::{Dashboard, use_dashboard};

fn recipient_row(dashboard: Dashboard, recipient: Recipient) -> impl IntoView {
    let recipient = StoredValue::new(recipient);
    let label = dashboard.select(move |s| recipient.with_value(|r| s.recipient_label(r).to_string()));
    let revealed = dashboard.select(move |s| recipient.with_value(|r| s.is_revealed(r)));
    let enabled = recipient.with_value(|r| r.enabled);

    let reveal = move |_| {
        let masked = recipient.with_value(|r| r.display().to_string());
        dashboard.state.update(|s| s.reveal_modal.open(masked));
    };
    let toggle = move |_| {
        let action = recipient.with_value(|r| SecureAction::toggle_recipient(&r.email));
        dashboard.state.update(|s| s.password_modal.open(action));
    };
    let test = move |_| {
        dashboard
            .state
            .update(|s| s.test_dialog.open(TestDialog::SingleEmail));
    };

    view! {
        <li class=if enabled { "recipient" } else { "recipient recipient-disabled" }>
            <span class="recipient-email">{move || label.get()}</span>
            <div class="recipient-actions">
                <Show when=move || !revealed.get()>
                    <button class="btn btn-sm btn-link" title="Reveal" on:click=reveal>
                        <i class="bi bi-eye"></i>
                    </button>
                </Show>
                <button class="btn btn-sm btn-link" title="Send test email" on:click=test>
                    <i class="bi bi-send"></i>
                </button>
                <button
                    class=if enabled { "btn btn-sm btn-success" } else { "btn btn-sm btn-secondary" }
                    title=if enabled { "Disable" } else { "Enable" }
                    on:click=toggle
                >
                    {if enabled { "On" } else { "Off" }}
                </button>
            </div>
        </li>
    }
}

#[component]
pub fn Recipients() -> impl IntoView {
    let dashboard = use_dashboard();
    let recipients = dashboard.page(|p| p.recipients.clone());

    view! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-people"></i>
                    " Recipients"
                </h2>
            </div>
            {if recipients.is_empty() {
                view! { <EmptyState message="No recipients configured"/> }.into_any()
            } else {
                view! {
                    <ul class="recipient-list">
                        {recipients
                            .into_iter()
                            .map(|r| recipient_row(dashboard, r))
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
