//! # trackerdash-adapter-dashboard-leptos
//!
//! Browser client of the event tracker, rendered with Leptos (CSR).
//!
//! The server embeds the page state as JSON (see [`config`]); from there the
//! client counts timers down locally, polls the Status/Action API and drives
//! the password-gated admin dialogs. All server traffic goes through
//! [`api::HttpApi`], the implementation of the `DashboardApi` port.

use leptos::prelude::*;

pub mod api;
pub mod browser;
mod components;
pub mod config;
mod context;
pub mod error;
pub mod logging;
mod pages;
mod pollers;

use components::ToastContainer;
use config::DashboardConfig;
use context::Dashboard;
use pages::DashboardPage;

/// Root application component.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let toast_ms = config.intervals.toast_ms;
    let dashboard = Dashboard::new(config);
    provide_context(dashboard);
    pollers::start(dashboard);

    view! {
        <ToastContainer lifetime_ms=toast_ms>
            <DashboardPage/>
        </ToastContainer>
    }
}
