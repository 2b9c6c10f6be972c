//! API diagnostics panel.

use leptos::prelude::*;
use trackerdash_domain::console::{DiagnosticCell, DiagnosticsView};

use crate::context::use_dashboard;

#[component]
fn Metric(#[prop(into)] label: String, cell: DiagnosticCell) -> impl IntoView {
    view! {
        <div class="diag-item">
            <span class="diag-label">{label}</span>
            <span class=format!("diag-value {}", cell.severity.css_class())>{cell.text}</span>
        </div>
    }
}

fn metrics(diag: DiagnosticsView) -> impl IntoView {
    view! {
        <Metric label="Response time" cell=diag.response_time/>
        <Metric label="Status code" cell=diag.status_code/>
        <Metric label="Response size" cell=diag.response_size/>
        <Metric label="Events found" cell=diag.events_count/>
        <Metric label="Total API calls" cell=diag.total_calls/>
        <Metric label="Failed calls" cell=diag.failed_calls/>
        <Metric label="Avg response" cell=diag.avg_response_time/>
        <Metric label="Last error" cell=diag.last_error/>
    }
}

/// Redrawn on every console poll.
#[component]
pub fn Diagnostics() -> impl IntoView {
    let diagnostics = use_dashboard().console.diagnostics;

    view! {
        <section class="card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-activity"></i>
                    " API diagnostics"
                </h2>
                {move || {
                    diagnostics
                        .with(|d| d.as_ref().map(|d| d.badge))
                        .map(|badge| view! { <span class=badge.css_class()>{badge.label()}</span> })
                }}
            </div>
            <div class="diag-grid">
                {move || diagnostics.get().map(metrics)}
            </div>
        </section>
    }
}
