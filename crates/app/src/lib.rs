//! # trackerdash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DashboardApi`: the Status/Action API over HTTP
//!   - `Notifier`: desktop notifications
//! - Define **use-case services**, one per dashboard concern:
//!   - `TimerService`: countdown resync
//!   - `ConsoleService`: console, diagnostics and check history polling
//!   - `StatsService`: chart series per view
//!   - `EventService`: live event listing
//!   - `ActionService`: password-gated actions and test dialogs
//!   - `RevealService`: masked email reveal
//!   - `PreferenceService`: theme and notification preference
//!   - `NotificationService`: new-event notification polling
//! - Turn every failure into a logged no-op or a UI decision, never a panic
//!
//! ## Dependency rule
//! Depends on `trackerdash-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
