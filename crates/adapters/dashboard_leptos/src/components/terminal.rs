//! Console terminal fed by the console poller.

use leptos::html;
use leptos::prelude::*;
use trackerdash_domain::action::SecureAction;

use crate::context::use_dashboard;

/// Scrolling log view with an auto-scroll switch and a clear button.
#[component]
pub fn Terminal() -> impl IntoView {
    let dashboard = use_dashboard();
    let lines = dashboard.console.lines;
    let auto_scroll = dashboard.select(|s| s.auto_scroll);
    let body_ref = NodeRef::<html::Div>::new();

    // Keep the newest line in view after each redraw.
    Effect::new(move |_| {
        lines.track();
        if auto_scroll.get_untracked() {
            request_animation_frame(move || {
                if let Some(body) = body_ref.get_untracked() {
                    body.set_scroll_top(body.scroll_height());
                }
            });
        }
    });

    view! {
        <section class="card terminal-card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-terminal"></i>
                    " Console"
                </h2>
                <div class="card-actions">
                    <button
                        class=move || {
                            if auto_scroll.get() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" }
                        }
                        title="Auto-scroll"
                        on:click=move |_| dashboard.state.update(|s| s.toggle_auto_scroll())
                    >
                        <i class="bi bi-arrow-down-square"></i>
                    </button>
                    <button
                        class="btn btn-sm btn-danger"
                        title="Clear logs"
                        on:click=move |_| {
                            dashboard
                                .state
                                .update(|s| s.password_modal.open(SecureAction::clear_logs()));
                        }
                    >
                        <i class="bi bi-trash"></i>
                    </button>
                </div>
            </div>
            <div class="terminal" node_ref=body_ref>
                {move || {
                    let entries = lines.get();
                    if entries.is_empty() {
                        return view! {
                            <div class="terminal-line terminal-placeholder">
                                "Waiting for activity..."
                            </div>
                        }
                            .into_any();
                    }
                    entries
                        .into_iter()
                        .map(|entry| {
                            let time = entry.display_time().to_string();
                            view! {
                                <div class=format!("terminal-line log-{}", entry.kind)>
                                    <span class="terminal-time">{time}</span>
                                    <span class="terminal-msg">{entry.msg}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </section>
    }
}
