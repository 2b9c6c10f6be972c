//! Background loops that run for the lifetime of the page.
//!
//! Each loop is a `gloo-timers` sleep on the single-threaded executor. A
//! failed request is logged by its service and retried on the next period.
//! Overlapping requests are not prevented; the last writer wins.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_app::services::console_service::ConsoleService;
use trackerdash_app::services::notification_service::NotificationService;
use trackerdash_app::services::timer_service::TimerService;
use trackerdash_domain::countdown::TickOutcome;
use trackerdash_domain::notification::NotificationWatermark;
use trackerdash_domain::time::now;

use crate::browser::BrowserNotifier;
use crate::context::Dashboard;

/// Start every loop and run the initial status and console fetches.
pub fn start(dashboard: Dashboard) {
    let intervals = dashboard.intervals();

    spawn_local(resync(dashboard));
    spawn_local(poll_console(dashboard));

    spawn_local(async move {
        loop {
            TimeoutFuture::new(intervals.tick_ms).await;
            tick(dashboard);
        }
    });

    spawn_local(async move {
        loop {
            TimeoutFuture::new(intervals.resync_ms).await;
            resync(dashboard).await;
        }
    });

    spawn_local(async move {
        loop {
            TimeoutFuture::new(intervals.console_ms).await;
            poll_console(dashboard).await;
        }
    });

    spawn_local(watch_notifications(dashboard));
}

/// Advance the countdowns by one second and resync if the server looks
/// stalled.
fn tick(dashboard: Dashboard) {
    dashboard.clock.set(now());
    if dashboard.state.try_update(|s| s.countdown.tick()) == Some(TickOutcome::ResyncNeeded) {
        tracing::info!("countdowns idle at zero, resyncing");
        spawn_local(resync(dashboard));
    }
}

/// Pull the authoritative schedule and totals from `/api/status`.
pub async fn resync(dashboard: Dashboard) {
    let Some(status) = TimerService::new(dashboard.api).refresh().await else {
        return;
    };
    dashboard.state.update(|s| s.apply_status(&status, now()));
    if let Some(start) = status.uptime_start() {
        dashboard.uptime_start.set(Some(start));
    }
}

async fn poll_console(dashboard: Dashboard) {
    let Some(snapshot) = ConsoleService::new(dashboard.api).poll().await else {
        return;
    };
    let limits = dashboard.limits();
    // Watermarks are bookkeeping only; advancing them must not re-render.
    let update = dashboard.state.try_update_untracked(|s| {
        s.watermarks
            .apply(snapshot, limits.console_lines, limits.history_cards)
    });
    if let Some(update) = update {
        dashboard.console.apply(update);
    }
}

/// Poll for new events while notifications are switched on.
///
/// The watermark restarts at the current time whenever notifications are off,
/// so switching them on never replays old events.
async fn watch_notifications(dashboard: Dashboard) {
    let period = dashboard.intervals().notifications_ms;
    let service = NotificationService::new(dashboard.api, BrowserNotifier, dashboard.title());
    let mut watermark = NotificationWatermark::starting_at(now());

    loop {
        TimeoutFuture::new(period).await;
        if dashboard.state.with_untracked(|s| s.notifications_enabled) {
            service.poll(&mut watermark, now()).await;
        } else {
            watermark = NotificationWatermark::starting_at(now());
        }
    }
}
