mod chart;
mod check_history;
mod controls;
mod diagnostics;
mod event_search;
mod loading;
mod notifications;
mod password_modal;
mod recipients;
mod reveal_modal;
mod settings_modal;
mod stat_card;
mod terminal;
mod test_dialog;
mod theme_toggle;
mod timers;
mod toast;

pub use chart::StatsChart;
pub use check_history::CheckHistory;
pub use controls::Controls;
pub use diagnostics::Diagnostics;
pub use event_search::{LiveEvents, RecentEvents};
pub use loading::{EmptyState, Loading};
pub use notifications::NotificationToggle;
pub use password_modal::PasswordModal;
pub use recipients::Recipients;
pub use reveal_modal::RevealModal;
pub use settings_modal::SettingsModal;
pub use stat_card::StatCard;
pub use terminal::Terminal;
pub use test_dialog::TestDialogModal;
pub use theme_toggle::ThemeToggle;
pub use timers::Timers;
pub use toast::{ToastContainer, use_toasts};
