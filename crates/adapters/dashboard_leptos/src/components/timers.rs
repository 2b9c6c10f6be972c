//! Countdown, totals and uptime cards.

use leptos::prelude::*;
use trackerdash_domain::time::format_uptime;

use crate::components::StatCard;
use crate::context::use_dashboard;

fn expired_class(expired: bool) -> String {
    if expired { "expired" } else { "" }.to_string()
}

/// The stats row at the top of the dashboard.
#[component]
pub fn Timers() -> impl IntoView {
    let dashboard = use_dashboard();
    let countdown = dashboard.select(|s| s.countdown.clone());
    let totals = dashboard.select(|s| s.totals);
    let seen = dashboard.page(|p| p.seen_count).to_string();

    let check = Signal::derive(move || countdown.with(|c| c.check_display()));
    let check_class = Signal::derive(move || expired_class(countdown.with(|c| c.check_expired())));
    let heartbeat = Signal::derive(move || countdown.with(|c| c.heartbeat_display()));
    let heartbeat_class =
        Signal::derive(move || expired_class(countdown.with(|c| c.heartbeat_expired())));
    let uptime = Signal::derive(move || {
        format_uptime(dashboard.uptime_start.get(), dashboard.clock.get())
    });

    view! {
        <section class="stats-grid">
            <StatCard label="Next check" icon="clock" value=check value_class=check_class/>
            <StatCard
                label="Next heartbeat"
                icon="heart-pulse"
                value=heartbeat
                value_class=heartbeat_class
            />
            <StatCard
                label="Total checks"
                icon="arrow-repeat"
                value=Signal::derive(move || totals.get().total_checks.to_string())
            />
            <StatCard
                label="Emails sent"
                icon="envelope"
                value=Signal::derive(move || totals.get().emails_sent.to_string())
            />
            <StatCard label="Events seen" icon="eye" value=Signal::stored(seen)/>
            <StatCard label="Uptime" icon="hourglass-split" value=uptime/>
        </section>
    }
}
