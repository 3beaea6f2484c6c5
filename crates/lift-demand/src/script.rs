//! `ScriptedArrivals`: a fixed, tick-keyed list of arrivals.
//!
//! Scripts make runs exactly reproducible without relying on an RNG stream,
//! which is what regression tests and replays want.  Internally a
//! `BTreeMap<Tick, Vec<Arrival>>`: O(log T) push and drain where T is the
//! number of distinct scripted ticks.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::{Arrival, DemandSource};

/// Arrivals keyed by the tick at which they happen.
#[derive(Default, Debug, Clone)]
pub struct ScriptedArrivals {
    inner: BTreeMap<Tick, Vec<Arrival>>,
    /// Cached total arrival count for O(1) `len()`.
    total: usize,
}

impl ScriptedArrivals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `arrival` at `tick`.  Several arrivals may share a tick; they
    /// are injected in push order.
    pub fn push(&mut self, tick: Tick, arrival: Arrival) {
        self.inner.entry(tick).or_default().push(arrival);
        self.total += 1;
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, tick: Tick, arrival: Arrival) -> Self {
        self.push(tick, arrival);
        self
    }

    /// Remove and return everything scheduled for exactly `tick`.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Arrival>> {
        let arrivals = self.inner.remove(&tick)?;
        self.total -= arrivals.len();
        Some(arrivals)
    }

    /// The earliest tick with a pending arrival.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending arrivals.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks with at least one pending arrival.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}

impl DemandSource for ScriptedArrivals {
    fn arrivals(&mut self, tick: Tick) -> Vec<Arrival> {
        self.drain_tick(tick).unwrap_or_default()
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}
