//! Stat card component for displaying a labelled, live value.

use leptos::prelude::*;

/// A card displaying a label and a reactive value.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// Bootstrap icon name shown beside the label.
    #[prop(into)]
    icon: String,
    /// The value to display.
    #[prop(into)]
    value: Signal<String>,
    /// Extra classes for the value, e.g. `expired`.
    #[prop(into, optional)]
    value_class: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">
                <i class=format!("bi bi-{icon}")></i>
                {label}
            </span>
            <span class=move || format!("stat-value {}", value_class.get())>{value}</span>
        </div>
    }
}
