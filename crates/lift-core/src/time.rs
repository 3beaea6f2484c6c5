//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! discrete elevator step: every unit moves at most one floor per tick.
//! `SimClock` maps ticks to nominal wall-clock milliseconds:
//!
//!   elapsed_ms = tick * tick_duration_ms
//!
//! In the stepped driver this is purely nominal.  The threaded runner uses
//! the same durations as real sleep intervals.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
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

/// Tracks the current tick and converts it to nominal elapsed time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many milliseconds one tick represents.
    pub tick_duration_ms: u64,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_ms: u64) -> Self {
        Self {
            tick_duration_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Nominal milliseconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.ms_at(self.current_tick)
    }

    /// Nominal milliseconds at an arbitrary tick.
    #[inline]
    pub fn ms_at(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_duration_ms
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        write!(f, "{} ({}.{:03}s)", self.current_tick, ms / 1_000, ms % 1_000)
    }
}
