//! Placeholder rows for lists that are still being fetched or are empty.

use leptos::prelude::*;

/// Spinner row shown while a list is loading.
#[component]
pub fn Loading(
    #[prop(default = "Loading\u{2026}".into(), into)] message: String,
) -> impl IntoView {
    view! {
        <div class="list-placeholder" role="status">
            <span class="spinner-border spinner-border-sm"></span>
            <span>{message}</span>
        </div>
    }
}

/// Muted row shown in place of an empty list.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="list-placeholder text-muted">
            <i class="bi bi-inbox"></i>
            <span>{message}</span>
        </div>
    }
}
