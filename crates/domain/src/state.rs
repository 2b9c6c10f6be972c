//! The dashboard's page-scoped mutable state, gathered in one value that is
//! handed to every handler.

use std::collections::HashMap;

use crate::action::PasswordModal;
use crate::bootstrap::{PageBootstrap, Recipient};
use crate::console::ConsoleWatermarks;
use crate::countdown::Countdown;
use crate::dialog::TestDialogState;
use crate::preferences::Theme;
use crate::reveal::{RevealModal, RevealResolution};
use crate::stats::ChartView;
use crate::status::{StatusResponse, Totals};
use crate::time::Timestamp;

/// Everything the client tracks between events. Nothing here outlives the
/// page; the server re-renders it on the next load.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub countdown: Countdown,
    pub totals: Totals,
    pub password_modal: PasswordModal,
    pub reveal_modal: RevealModal,
    pub test_dialog: TestDialogState,
    pub watermarks: ConsoleWatermarks,
    pub auto_scroll: bool,
    pub notifications_enabled: bool,
    pub chart_view: ChartView,
    pub theme: Theme,
    /// Unmasked addresses revealed this session, keyed by masked form.
    revealed: HashMap<String, String>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self::from_bootstrap(&PageBootstrap::default())
    }
}

impl ClientState {
    /// Seed the state from what the server rendered into the page.
    #[must_use]
    pub fn from_bootstrap(page: &PageBootstrap) -> Self {
        Self {
            countdown: Countdown::new(page.next_check_seconds, page.next_heartbeat_seconds),
            totals: Totals {
                total_checks: page.total_checks,
                emails_sent: page.emails_sent,
            },
            password_modal: PasswordModal::default(),
            reveal_modal: RevealModal::default(),
            test_dialog: TestDialogState::default(),
            watermarks: ConsoleWatermarks::default(),
            auto_scroll: true,
            notifications_enabled: page.notifications_enabled,
            chart_view: ChartView::default(),
            theme: page.theme,
            revealed: HashMap::new(),
        }
    }

    pub fn toggle_auto_scroll(&mut self) {
        self.auto_scroll = !self.auto_scroll;
    }

    /// Resync the countdown and refresh totals from a status reply.
    pub fn apply_status(&mut self, status: &StatusResponse, now: Timestamp) {
        self.countdown.resync(status.timer_sync(now));
        if let Some(totals) = status.totals() {
            self.totals = totals;
        }
    }

    /// Apply a reveal outcome to the modal and remember revealed addresses.
    pub fn apply_reveal(&mut self, resolution: &RevealResolution) {
        if let RevealResolution::Revealed { masked, email } = resolution {
            self.revealed.insert(masked.clone(), email.clone());
        }
        self.reveal_modal.apply(resolution);
    }

    /// Revealed address for `recipient` if known, else its masked display.
    #[must_use]
    pub fn recipient_label<'a>(&'a self, recipient: &'a Recipient) -> &'a str {
        self.revealed
            .get(recipient.display())
            .map_or_else(|| recipient.display(), String::as_str)
    }

    #[must_use]
    pub fn is_revealed(&self, recipient: &Recipient) -> bool {
        self.revealed.contains_key(recipient.display())
    }
}
