//! Dashboard context shared by every component through Leptos context.

use leptos::prelude::*;
use trackerdash_domain::bootstrap::PageBootstrap;
use trackerdash_domain::console::{CheckSummary, ConsoleEntry, ConsoleUpdate, DiagnosticsView};
use trackerdash_domain::state::ClientState;
use trackerdash_domain::stats::ChartData;
use trackerdash_domain::time::{Timestamp, now, parse_timestamp};

use crate::api::HttpApi;
use crate::config::{DashboardConfig, PollIntervals, RenderLimits};

/// Rendered output of the console poller.
#[derive(Clone, Copy)]
pub struct ConsoleSignals {
    /// Oldest first.
    pub lines: RwSignal<Vec<ConsoleEntry>>,
    pub diagnostics: RwSignal<Option<DiagnosticsView>>,
    /// Newest first.
    pub history: RwSignal<Vec<CheckSummary>>,
}

impl ConsoleSignals {
    fn new() -> Self {
        Self {
            lines: RwSignal::new(Vec::new()),
            diagnostics: RwSignal::new(None),
            history: RwSignal::new(Vec::new()),
        }
    }

    /// Write the parts of `update` that changed.
    pub fn apply(&self, update: ConsoleUpdate) {
        if let Some(lines) = update.terminal {
            self.lines.set(lines);
        }
        if let Some(view) = update.diagnostics {
            self.diagnostics.set(Some(view));
        }
        if let Some(history) = update.history {
            self.history.set(history);
        }
    }
}

/// App-wide state and configuration.
#[derive(Clone, Copy)]
pub struct Dashboard {
    /// The client state machine.
    pub state: RwSignal<ClientState>,
    pub console: ConsoleSignals,
    /// Latest chart series for the selected view.
    pub chart: RwSignal<Option<ChartData>>,
    pub uptime_start: RwSignal<Option<Timestamp>>,
    /// Wall clock, refreshed every tick.
    pub clock: RwSignal<Timestamp>,
    pub settings_open: RwSignal<bool>,
    pub api: HttpApi,
    config: StoredValue<DashboardConfig>,
}

impl Dashboard {
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let state = ClientState::from_bootstrap(&config.page);
        let uptime_start = config.page.uptime_start.as_deref().and_then(parse_timestamp);
        Self {
            state: RwSignal::new(state),
            console: ConsoleSignals::new(),
            chart: RwSignal::new(None),
            uptime_start: RwSignal::new(uptime_start),
            clock: RwSignal::new(now()),
            settings_open: RwSignal::new(false),
            api: HttpApi,
            config: StoredValue::new(config),
        }
    }

    #[must_use]
    pub fn intervals(&self) -> PollIntervals {
        self.config.with_value(|c| c.intervals)
    }

    #[must_use]
    pub fn limits(&self) -> RenderLimits {
        self.config.with_value(|c| c.limits)
    }

    /// The server-rendered page state.
    #[must_use]
    pub fn page<T>(&self, f: impl FnOnce(&PageBootstrap) -> T) -> T {
        self.config.with_value(|c| f(&c.page))
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.page(|p| p.title.clone())
    }

    /// A memoised projection of the client state, so that views only
    /// re-render when their slice changes rather than on every tick.
    pub fn select<T>(&self, f: impl Fn(&ClientState) -> T + Send + Sync + 'static) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let state = self.state;
        Memo::new(move |_| state.with(|s| f(s)))
    }
}

/// Access the dashboard from Leptos context.
///
/// Must be called within the component tree mounted by [`crate::App`].
#[must_use]
pub fn use_dashboard() -> Dashboard {
    expect_context::<Dashboard>()
}
