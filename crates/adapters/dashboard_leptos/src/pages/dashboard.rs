use leptos::prelude::*;

use crate::components::{
    CheckHistory, Controls, Diagnostics, LiveEvents, NotificationToggle, PasswordModal,
    RecentEvents, Recipients, RevealModal, SettingsModal, StatsChart, Terminal, TestDialogModal,
    ThemeToggle, Timers,
};
use crate::context::use_dashboard;

/// The single dashboard page. Modals sit at the end so they stack above the
/// cards.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let title = use_dashboard().title();

    view! {
        <header class="navbar">
            <h1 class="navbar-brand">
                <i class="bi bi-radar"></i>
                " "
                {title}
            </h1>
            <div class="navbar-actions">
                <NotificationToggle/>
                <ThemeToggle/>
            </div>
        </header>
        <main class="container">
            <Timers/>
            <div class="grid-2">
                <Controls/>
                <Recipients/>
            </div>
            <Terminal/>
            <div class="grid-2">
                <Diagnostics/>
                <CheckHistory/>
            </div>
            <StatsChart/>
            <div class="grid-2">
                <RecentEvents/>
                <LiveEvents/>
            </div>
        </main>
        <PasswordModal/>
        <RevealModal/>
        <SettingsModal/>
        <TestDialogModal/>
    }
}
