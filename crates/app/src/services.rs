//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod action_service;
pub mod console_service;
pub mod event_service;
pub mod notification_service;
pub mod preference_service;
pub mod reveal_service;
pub mod stats_service;
pub mod timer_service;
