//! Owned auto-advance timer.
//!
//! A timer exists only while its owning engine is active, unpaused and has
//! something to rotate. Dropping the value cancels it; there is no separate
//! handle to forget.

use std::fmt;
use std::time::{Duration, Instant};

/// Identity of one timer registration.
///
/// Every (re)registration gets a fresh token. A callback carrying a token
/// that no longer matches the engine's live timer is stale and must not
/// mutate rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw registration number, for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Interval timer armed at a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AutoAdvanceTimer {
    token: TimerToken,
    interval: Duration,
    deadline: Instant,
}

impl AutoAdvanceTimer {
    /// Arm a new timer whose first expiry is one interval after `now`.
    pub(crate) fn arm(token: TimerToken, interval: Duration, now: Instant) -> Self {
        Self {
            token,
            interval,
            deadline: now + interval,
        }
    }

    pub(crate) fn token(&self) -> TimerToken {
        self.token
    }

    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Schedule the next expiry after firing.
    ///
    /// Keeps a steady cadence when the loop wakes on time. If the loop fell
    /// more than one interval behind, missed ticks are not replayed.
    pub(crate) fn rearm(&mut self, now: Instant) {
        let next = self.deadline + self.interval;
        self.deadline = if next <= now { now + self.interval } else { next };
    }
}
