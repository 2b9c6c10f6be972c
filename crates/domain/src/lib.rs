//! # trackerdash-domain
//!
//! Pure domain model for the event-tracker dashboard client.
//!
//! ## Responsibilities
//! - Wire types exchanged with the Status/Action API (status, console, stats,
//!   notification checks, action replies)
//! - Foundational helpers: error conventions, timestamps, time/byte formatting
//! - **Countdown** state with drift resync and restart detection
//! - **Secure action** and **email reveal** modal state machines, and the
//!   resolution of a server reply into a UI decision
//! - Render watermarks, severity mapping and check-card classification
//! - Chart series per aggregation view, list search filtering
//! - The explicit [`state::ClientState`] object that replaces ambient globals
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod action;
pub mod bootstrap;
pub mod console;
pub mod countdown;
pub mod dialog;
pub mod events;
pub mod notification;
pub mod preferences;
pub mod reveal;
pub mod search;
pub mod state;
pub mod stats;
pub mod status;
pub mod toast;
