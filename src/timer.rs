//! Countdown timer driven by tick events.
//!
//! A timer is created running and moves to expired on the tick that reaches
//! its total duration. Each timer carries a [`TimerId`]; ticks tagged with a
//! different id are ignored so an in-flight tick from a replaced timer can
//! never advance the current one.

use std::fmt;
use std::time::Duration;

use anyhow::{bail, Result};

/// Generation tag identifying one timer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Returns the id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Countdown state for a single brew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    id: TimerId,
    total: Duration,
    elapsed: Duration,
    interval: Duration,
    running: bool,
    expired: bool,
}

impl TimerState {
    /// Creates a running timer with nothing elapsed.
    pub fn start(id: TimerId, total: Duration, interval: Duration) -> Result<Self> {
        if total.is_zero() {
            bail!("timer duration must be positive");
        }
        if interval.is_zero() {
            bail!("tick interval must be positive");
        }

        Ok(Self {
            id,
            total,
            elapsed: Duration::ZERO,
            interval,
            running: true,
            expired: false,
        })
    }

    /// Advances by one interval if the tick belongs to this running timer.
    ///
    /// Returns true when the tick was applied.
    pub fn on_tick(&mut self, id: TimerId) -> bool {
        if !self.running || id != self.id {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(self.interval);
        if self.elapsed >= self.total {
            self.elapsed = self.total;
            self.running = false;
            self.expired = true;
        }
        true
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Time left until expiry.
    pub fn remaining(&self) -> Duration {
        self.total - self.elapsed
    }
}

/// Formats a countdown as `4m05s`, `45s` or `0s`.
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    if hours > 0 {
        format!("{hours}h{minutes:02}m{seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
