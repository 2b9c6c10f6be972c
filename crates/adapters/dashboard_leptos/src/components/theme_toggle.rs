//! Dark/light theme toggle button persisted through `/api/theme`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_app::services::preference_service::PreferenceService;
use trackerdash_domain::preferences::PreferenceUpdate;

use crate::browser;
use crate::context::use_dashboard;

/// A toggle button that switches between light and dark themes.
///
/// Applies the server-rendered theme on mount. Each click flips the theme
/// locally and saves it in the background; the chart recolours through its
/// own effect.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dashboard = use_dashboard();
    let theme = dashboard.select(|s| s.theme);
    browser::apply_theme(theme.get_untracked());

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        dashboard.state.update(|s| s.theme = next);
        browser::apply_theme(next);
        spawn_local(async move {
            PreferenceService::new(dashboard.api)
                .save(PreferenceUpdate::Theme { theme: next })
                .await;
        });
    };

    let icon = move || {
        if theme.get().is_dark() {
            "bi bi-sun"
        } else {
            "bi bi-moon-stars"
        }
    };

    view! {
        <button class="theme-toggle" on:click=toggle title="Toggle theme">
            <i class=icon></i>
        </button>
    }
}
