//! Countdown timers for the next check and next heartbeat.
//!
//! The client decrements both counters once per second and periodically
//! resynchronises them from the server. When both sit at zero for a while the
//! server has probably restarted, so extra resyncs are requested until a
//! positive value comes back.

use crate::status::TimerSync;
use crate::time::format_time;

/// Idle ticks to wait before any restart-detection resync.
pub const STALL_GRACE_TICKS: u32 = 10;
/// Once past the grace period, resync every this many idle ticks.
pub const STALL_RESYNC_EVERY: u32 = 30;

/// Seconds remaining until the next check and heartbeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    next_check: u64,
    next_heartbeat: u64,
    idle_ticks: u32,
}

/// What the caller should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing beyond re-rendering.
    Running,
    /// Both counters are stalled at zero; ask the server for fresh values.
    ResyncNeeded,
}

impl Countdown {
    #[must_use]
    pub fn new(next_check: u64, next_heartbeat: u64) -> Self {
        Self {
            next_check,
            next_heartbeat,
            idle_ticks: 0,
        }
    }

    #[must_use]
    pub fn next_check(&self) -> u64 {
        self.next_check
    }

    #[must_use]
    pub fn next_heartbeat(&self) -> u64 {
        self.next_heartbeat
    }

    /// Advance one second. Counters never go below zero.
    pub fn tick(&mut self) -> TickOutcome {
        self.next_check = self.next_check.saturating_sub(1);
        self.next_heartbeat = self.next_heartbeat.saturating_sub(1);

        if self.next_check == 0 && self.next_heartbeat == 0 {
            self.idle_ticks = self.idle_ticks.saturating_add(1);
            if self.idle_ticks >= STALL_GRACE_TICKS && self.idle_ticks % STALL_RESYNC_EVERY == 0 {
                return TickOutcome::ResyncNeeded;
            }
        } else {
            self.idle_ticks = 0;
        }
        TickOutcome::Running
    }

    /// Overwrite counters with the server's positive values; absent values
    /// leave the local counter untouched.
    pub fn resync(&mut self, sync: TimerSync) {
        if let Some(secs) = sync.next_check {
            self.next_check = secs;
        }
        if let Some(secs) = sync.next_heartbeat {
            self.next_heartbeat = secs;
        }
    }

    /// `MM:SS` for the check timer (promoted to `HH:MM:SS` past an hour).
    #[must_use]
    pub fn check_display(&self) -> String {
        format_time(self.next_check, false)
    }

    /// `HH:MM:SS` for the heartbeat timer.
    #[must_use]
    pub fn heartbeat_display(&self) -> String {
        format_time(self.next_heartbeat, true)
    }

    #[must_use]
    pub fn check_expired(&self) -> bool {
        self.next_check == 0
    }

    #[must_use]
    pub fn heartbeat_expired(&self) -> bool {
        self.next_heartbeat == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decrement_both_counters_on_tick() {
        let mut countdown = Countdown::new(5, 10);
        assert_eq!(countdown.tick(), TickOutcome::Running);
        assert_eq!(countdown.next_check(), 4);
        assert_eq!(countdown.next_heartbeat(), 9);
    }

    #[test]
    fn should_never_go_below_zero() {
        for start in [0_u64, 1, 2, 59, 61] {
            let mut countdown = Countdown::new(start, start);
            for _ in 0..(start + 5) {
                countdown.tick();
            }
            assert_eq!(countdown.next_check(), 0);
            assert_eq!(countdown.next_heartbeat(), 0);
        }
    }

    #[test]
    fn should_request_resync_every_thirty_idle_ticks() {
        let mut countdown = Countdown::new(0, 0);
        let resync_ticks: Vec<u32> = (1..=90)
            .filter(|_| countdown.tick() == TickOutcome::ResyncNeeded)
            .collect();
        assert_eq!(resync_ticks, vec![30, 60, 90]);
    }

    #[test]
    fn should_reset_idle_counter_when_a_timer_is_running() {
        let mut countdown = Countdown::new(0, 0);
        for _ in 0..29 {
            countdown.tick();
        }
        countdown.resync(TimerSync {
            next_check: Some(3),
            next_heartbeat: None,
        });
        countdown.tick();
        for _ in 0..29 {
            assert_eq!(countdown.tick(), TickOutcome::Running);
        }
    }

    #[test]
    fn should_keep_local_value_when_sync_is_absent() {
        let mut countdown = Countdown::new(100, 200);
        countdown.resync(TimerSync {
            next_check: None,
            next_heartbeat: Some(50),
        });
        assert_eq!(countdown.next_check(), 100);
        assert_eq!(countdown.next_heartbeat(), 50);
    }

    #[test]
    fn should_render_displays_and_expiry() {
        let countdown = Countdown::new(0, 3661);
        assert_eq!(countdown.check_display(), "00:00");
        assert_eq!(countdown.heartbeat_display(), "01:01:01");
        assert!(countdown.check_expired());
        assert!(!countdown.heartbeat_expired());
    }
}
