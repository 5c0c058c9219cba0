//! Wall-clock countdown
//!
//! The countdown is the one piece of state deliberately decoupled from the
//! logical frame rate: it loses a second only when a full 1000 ms of real
//! time has elapsed since the last decrement, so it stays correct however
//! unevenly frames arrive.

use serde::{Deserialize, Serialize};

/// Countdown timer measured in whole seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    running: bool,
    /// Wall-clock timestamp (ms) of the last decrement
    last_decrement_ms: u64,
}

impl Countdown {
    /// A stopped countdown; call [`Countdown::resume`] to start it
    pub fn new(start_secs: u32) -> Self {
        Self {
            remaining: start_secs,
            running: false,
            last_decrement_ms: 0,
        }
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance against the wall clock. Decrements by exactly one second when
    /// at least 1000 ms have elapsed since the last decrement; returns true
    /// when that decrement just hit zero.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        if now_ms.saturating_sub(self.last_decrement_ms) >= 1000 {
            let before = self.remaining;
            self.remaining = self.remaining.saturating_sub(1);
            self.last_decrement_ms = now_ms;
            return before > 0 && self.remaining == 0;
        }
        false
    }

    /// Refund seconds (death and goal bonuses)
    pub fn add(&mut self, secs: u32) {
        self.remaining += secs;
    }

    /// Freeze the countdown; paused wall time never counts
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Unfreeze, restarting the 1000 ms window from `now_ms`
    pub fn resume(&mut self, now_ms: u64) {
        self.running = true;
        self.last_decrement_ms = now_ms;
    }

    /// Back to the starting value, stopped
    pub fn reset(&mut self, start_secs: u32) {
        self.remaining = start_secs;
        self.running = false;
        self.last_decrement_ms = 0;
    }

    /// Zero-padded `MM:SS` for the HUD
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_decrement_before_full_second() {
        let mut timer = Countdown::new(30);
        timer.resume(0);
        assert!(!timer.advance(999));
        assert_eq!(timer.remaining(), 30);
        assert!(!timer.advance(1000));
        assert_eq!(timer.remaining(), 29);
    }

    #[test]
    fn test_one_second_per_window() {
        let mut timer = Countdown::new(30);
        timer.resume(0);
        // A long stall still costs exactly one second per advance call
        timer.advance(5000);
        assert_eq!(timer.remaining(), 29);
        timer.advance(5500);
        assert_eq!(timer.remaining(), 29);
        timer.advance(6000);
        assert_eq!(timer.remaining(), 28);
    }

    #[test]
    fn test_expiry_fires_once() {
        let mut timer = Countdown::new(1);
        timer.resume(0);
        assert!(timer.advance(1000));
        assert_eq!(timer.remaining(), 0);
        // Already at zero: saturates, does not fire again
        assert!(!timer.advance(2000));
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_paused_time_never_counts() {
        let mut timer = Countdown::new(30);
        timer.resume(0);
        timer.advance(1000);
        assert_eq!(timer.remaining(), 29);
        timer.pause();
        assert!(!timer.advance(30_000));
        assert_eq!(timer.remaining(), 29);
        // Resume restarts the window from the resume timestamp
        timer.resume(30_000);
        assert!(!timer.advance(30_500));
        assert!(!timer.advance(31_000));
        assert_eq!(timer.remaining(), 28);
    }

    #[test]
    fn test_display() {
        let mut timer = Countdown::new(65);
        assert_eq!(timer.display(), "01:05");
        timer.reset(9);
        assert_eq!(timer.display(), "00:09");
    }
}
