//! Grid of recent check results.

use leptos::prelude::*;
use trackerdash_domain::console::{CheckOutcome, CheckSummary};

use crate::components::EmptyState;
use crate::context::use_dashboard;

fn check_card(check: CheckSummary) -> impl IntoView {
    let outcome = check.outcome();
    let email_sent = matches!(outcome, CheckOutcome::NewEvents { email_sent: true, .. });
    view! {
        <div class=outcome.css_class()>
            <div class="check-header">
                <span class="check-number">"#" {check.check_number}</span>
                <span class="check-time">{check.time_display}</span>
            </div>
            <div class="check-date">{check.date_display}</div>
            <div class="check-result">{outcome.headline()}</div>
            <div class="check-meta">{format!("{} events fetched", check.events_fetched)}</div>
            <Show when=move || email_sent>
                <div class="check-email">
                    <i class="bi bi-envelope-check"></i>
                    " Email Sent"
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn CheckHistory() -> impl IntoView {
    let history = use_dashboard().console.history;

    view! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-clock-history"></i>
                    " Check history"
                </h2>
            </div>
            <div class="check-grid">
                {move || {
                    let checks = history.get();
                    if checks.is_empty() {
                        view! { <EmptyState message="No checks yet"/> }.into_any()
                    } else {
                        checks.into_iter().map(check_card).collect_view().into_any()
                    }
                }}
            </div>
        </section>
    }
}
