//! Countdown state machine
//!
//! Owns the remaining-seconds value and its lifecycle. The machine knows
//! nothing about terminals or rendering; the countdown screen feeds it ticks
//! and reads its phase back.

use crate::util::format::format_hms;

/// Lifecycle phases of a running countdown
///
/// `Running` moves to `Expired` when the remaining time reaches zero, or
/// straight to `Terminated` on a user-initiated close. `Expired` moves to
/// `Terminated` once the completion notice is acknowledged. `Terminated` is
/// absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ticking down once per second
    Running,
    /// Reached zero; completion notice pending acknowledgment
    Expired,
    /// Done, nothing left to do
    Terminated,
}

/// Countdown timer state
#[derive(Debug)]
pub struct Countdown {
    remaining_seconds: u64,
    phase: Phase,
}

impl Countdown {
    /// Create a countdown holding `initial_seconds`.
    ///
    /// Callers must pass a positive value; the configuration screen
    /// validates the total before constructing one.
    pub fn new(initial_seconds: u64) -> Self {
        Self {
            remaining_seconds: initial_seconds,
            phase: Phase::Running,
        }
    }

    /// Seconds left on the clock
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance the countdown by one second.
    ///
    /// Decrements the remaining time and expires on the tick that reaches
    /// zero. A tick that finds the value already at zero expires without
    /// decrementing, so the display never goes negative. Ticks after
    /// `Running` are ignored.
    pub fn tick(&mut self) -> Phase {
        if self.phase != Phase::Running {
            return self.phase;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds == 0 {
            self.phase = Phase::Expired;
        }
        self.phase
    }

    /// User closed the countdown window while it was running.
    pub fn close(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Terminated;
        }
    }

    /// Completion notice was acknowledged.
    pub fn acknowledge(&mut self) {
        if self.phase == Phase::Expired {
            self.phase = Phase::Terminated;
        }
    }

    /// Remaining time formatted as `HH:MM:SS`
    pub fn display(&self) -> String {
        format_hms(self.remaining_seconds as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_and_display() {
        let countdown = Countdown::new(60);
        assert_eq!(countdown.phase(), Phase::Running);
        assert_eq!(countdown.remaining_seconds(), 60);
        assert_eq!(countdown.display(), "00:01:00");
    }

    #[test]
    fn test_tick_decrements() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Phase::Running);
        assert_eq!(countdown.remaining_seconds(), 2);
        assert_eq!(countdown.display(), "00:00:02");
    }

    #[test]
    fn test_expires_on_tick_that_reaches_zero() {
        let mut countdown = Countdown::new(60);
        for _ in 0..59 {
            assert_eq!(countdown.tick(), Phase::Running);
        }
        assert_eq!(countdown.remaining_seconds(), 1);
        assert_eq!(countdown.tick(), Phase::Expired);
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_tick_at_zero_never_goes_negative() {
        let mut countdown = Countdown::new(1);
        countdown.tick();
        assert_eq!(countdown.phase(), Phase::Expired);

        // Stray ticks after expiry must not change anything
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 0);
        assert_eq!(countdown.phase(), Phase::Expired);
        assert_eq!(countdown.display(), "00:00:00");
    }

    #[test]
    fn test_manual_close_terminates_without_expiry() {
        let mut countdown = Countdown::new(37);
        countdown.close();
        assert_eq!(countdown.phase(), Phase::Terminated);
        assert_eq!(countdown.remaining_seconds(), 37);

        // Terminated is absorbing
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 37);
        assert_eq!(countdown.phase(), Phase::Terminated);
    }

    #[test]
    fn test_acknowledge_only_applies_when_expired() {
        let mut countdown = Countdown::new(5);
        countdown.acknowledge();
        assert_eq!(countdown.phase(), Phase::Running);

        while countdown.tick() == Phase::Running {}
        countdown.acknowledge();
        assert_eq!(countdown.phase(), Phase::Terminated);
    }
}
