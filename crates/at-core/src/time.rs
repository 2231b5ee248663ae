//! Simulation time model.
//!
//! # Design
//!
//! One tick is one simulated minute, so a day is [`TICKS_PER_DAY`] = 1440
//! ticks.  `SimClock` keeps three counters:
//!
//! - `time`: tick within the current day, reset to 0 on rollover;
//! - `day`: completed days;
//! - `steps`: monotonically increasing [`Tick`], never reset.
//!
//! The scheduler advances `time` and `steps` once per tick.  The rollover
//! into the next day is a separate call made by the model after the tick has
//! finished, so observers can still see `time == 1440` for the last tick of
//! a day if they look before the rollover.

use std::fmt;

/// Ticks (simulated minutes) per simulated day.
pub const TICKS_PER_DAY: u32 = 60 * 24;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick-of-day, day and step counters for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Tick within the current day.  Reaches `TICKS_PER_DAY` only between
    /// the end of a tick and the rollover check.
    pub time: u32,
    /// Completed simulated days.
    pub day: u32,
    /// Total ticks executed since the start of the run.
    pub steps: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.time += 1;
        self.steps = self.steps.offset(1);
    }

    /// Roll over into the next day if the current one is complete.
    ///
    /// Returns `true` if a rollover happened.
    pub fn rollover(&mut self) -> bool {
        if self.time >= TICKS_PER_DAY {
            self.day += 1;
            self.time = 0;
            true
        } else {
            false
        }
    }

    /// `(hour, minute)` of the current tick-of-day.
    #[inline]
    pub fn hour_minute(&self) -> (u32, u32) {
        (self.time / 60, self.time % 60)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.hour_minute();
        write!(f, "{} (day {} {:02}:{:02})", self.steps, self.day, h, m)
    }
}
