//! Countdown state for the cooking timer in the recipe dialog.
//!
//! The component owns the one-second ticker; this type only counts. Ticks
//! while paused or after reaching zero are ignored.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Countdown length the recipe dialog starts with.
pub const DEFAULT_TIMER_MINUTES: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl Countdown {
    pub fn new(minutes: u32) -> Self {
        let total_secs = minutes.saturating_mul(60);
        Self { total_secs, remaining_secs: total_secs, running: false }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Start or pause. A finished countdown stays stopped until `reset`.
    pub fn toggle(&mut self) {
        self.running = !self.running && !self.is_finished();
    }

    /// Back to the full length, paused.
    pub fn reset(&mut self) {
        self.remaining_secs = self.total_secs;
        self.running = false;
    }

    /// Advance one second. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.is_finished() {
            return false;
        }
        self.remaining_secs -= 1;
        if self.is_finished() {
            self.running = false;
            return true;
        }
        false
    }

    /// Percent of the countdown still left.
    pub fn percent_left(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.remaining_secs) / f64::from(self.total_secs)
    }

    /// Remaining time as `m:ss`.
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}
