//! Countdown-to-logout state machine
//!
//! When the API client reports an authentication failure, the console
//! shows a dialog counting down from [`COUNTDOWN_START`] and forces a
//! logout at zero. This module owns the countdown state; the 1-second
//! clock and the dialog live in `crate::ui::session`.

/// Seconds shown on the dialog when a countdown begins.
pub const COUNTDOWN_START: u32 = 3;

/// Result of advancing the countdown by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No countdown is running.
    Idle,
    /// Countdown still running; the new value to display.
    Counting(u32),
    /// Countdown reached zero: the caller must log out now. Reported
    /// exactly once per countdown; the monitor is idle afterwards.
    LogOut,
}

/// Session expiry monitor.
///
/// At most one countdown is active at a time: a trigger received while
/// counting down is ignored, so concurrent 401s cannot spawn concurrent
/// timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpiryMonitor {
    remaining: Option<u32>,
}

impl ExpiryMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a countdown in response to an authentication-failure signal.
    ///
    /// Only acts when a user is currently authenticated (spurious signals
    /// while logged out are dropped) and no countdown is active. Returns
    /// whether a countdown was started.
    pub fn trigger(&mut self, authenticated: bool) -> bool {
        if !authenticated || self.remaining.is_some() {
            return false;
        }
        self.remaining = Some(COUNTDOWN_START);
        true
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        match self.remaining {
            None => Tick::Idle,
            Some(n) if n > 1 => {
                self.remaining = Some(n - 1);
                Tick::Counting(n - 1)
            }
            Some(_) => {
                self.remaining = None;
                Tick::LogOut
            }
        }
    }

    /// Cancel the countdown without logging out (dialog dismissed or
    /// torn down).
    pub fn dismiss(&mut self) {
        self.remaining = None;
    }

    pub fn is_active(&self) -> bool {
        self.remaining.is_some()
    }

    /// Current countdown value while active.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_while_authenticated_starts_countdown_at_three() {
        let mut monitor = ExpiryMonitor::new();
        assert!(monitor.trigger(true));
        assert!(monitor.is_active());
        assert_eq!(monitor.remaining(), Some(COUNTDOWN_START));
    }

    #[test]
    fn trigger_while_unauthenticated_is_ignored() {
        let mut monitor = ExpiryMonitor::new();
        assert!(!monitor.trigger(false));
        assert!(!monitor.is_active());
    }

    #[test]
    fn concurrent_failures_start_a_single_countdown() {
        // Several in-flight requests can all fail with 401 around the
        // same time; only the first signal starts a countdown.
        let mut monitor = ExpiryMonitor::new();
        assert!(monitor.trigger(true));
        assert!(!monitor.trigger(true));
        assert!(!monitor.trigger(true));
        assert_eq!(monitor.remaining(), Some(COUNTDOWN_START));
    }

    #[test]
    fn three_ticks_log_out_exactly_once() {
        let mut monitor = ExpiryMonitor::new();
        monitor.trigger(true);
        assert_eq!(monitor.tick(), Tick::Counting(2));
        assert_eq!(monitor.tick(), Tick::Counting(1));
        assert_eq!(monitor.tick(), Tick::LogOut);
        // Monitor is idle again; further ticks never repeat the logout.
        assert_eq!(monitor.tick(), Tick::Idle);
        assert!(!monitor.is_active());
    }

    #[test]
    fn dismiss_cancels_without_logout() {
        let mut monitor = ExpiryMonitor::new();
        monitor.trigger(true);
        monitor.tick();
        monitor.dismiss();
        assert!(!monitor.is_active());
        // The cancelled countdown never reaches LogOut.
        assert_eq!(monitor.tick(), Tick::Idle);
    }

    #[test]
    fn countdown_can_restart_after_completion() {
        let mut monitor = ExpiryMonitor::new();
        monitor.trigger(true);
        monitor.tick();
        monitor.tick();
        assert_eq!(monitor.tick(), Tick::LogOut);
        assert!(monitor.trigger(true));
        assert_eq!(monitor.remaining(), Some(COUNTDOWN_START));
    }

    #[test]
    fn tick_without_trigger_is_idle() {
        let mut monitor = ExpiryMonitor::new();
        assert_eq!(monitor.tick(), Tick::Idle);
    }
}
