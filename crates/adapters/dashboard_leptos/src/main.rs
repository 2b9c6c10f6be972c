use leptos::mount::mount_to_body;
use leptos::prelude::*;
use trackerdash_adapter_dashboard_leptos::config::DashboardConfig;
use trackerdash_adapter_dashboard_leptos::{App, logging};

fn main() {
    console_error_panic_hook::set_once();

    let loaded = DashboardConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&config.logging.filter);
    if let Err(err) = &loaded {
        tracing::warn!(error = %err, "invalid dashboard config, using defaults");
    }
    tracing::info!(title = %config.page.title, "starting dashboard");

    mount_to_body(move || view! { <App config=config/> });
}
