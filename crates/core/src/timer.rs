//! Timer module - the round countdown
//!
//! An explicit controller owned by the game state, with start/stop/reset
//! operations. The engine is driven by an external 1 Hz tick; this type
//! only tracks seconds remaining and whether the countdown is live, so a
//! pause acknowledged by the dispatcher freezes it immediately.

use block_blitz_types::TIMER_DURATION;

/// Countdown for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimer {
    remaining_secs: u32,
    running: bool,
}

impl RoundTimer {
    /// Create a stopped timer with a full countdown
    pub fn new() -> Self {
        Self {
            remaining_secs: TIMER_DURATION,
            running: false,
        }
    }

    /// Seconds remaining, in `[0, TIMER_DURATION]`
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resume counting down from the current remaining value
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze the countdown; remaining seconds are preserved
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Refill to the full duration without changing the running flag
    pub fn reset(&mut self) {
        self.remaining_secs = TIMER_DURATION;
    }

    /// Apply one 1-second tick. Returns true when this tick exhausted the
    /// countdown. Ticks on a stopped or already exhausted timer are no-ops.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining_secs == 0 {
            return false;
        }
        self.remaining_secs -= 1;
        self.remaining_secs == 0
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}
