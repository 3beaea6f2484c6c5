//! Simulation configuration.
//!
//! `SimConfig::default()` describes the reference building: ten floors,
//! three elevators (capacities 5, 5 and 10), a 30 % chance per driver step
//! that 1–5 people call an elevator somewhere above the ground floor.
//! Applications typically load overrides from a JSON file (with the `serde`
//! feature) and call [`SimConfig::validate`] before building a simulation.

use crate::{Floor, LiftError, LiftResult, SimClock, Tick};

// ── CostWeights ───────────────────────────────────────────────────────────────

/// Heuristic multipliers applied to an elevator's raw route length.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostWeights {
    /// Candidate lies in the current travel direction, or the unit is idle.
    pub along_direction: f64,
    /// Candidate requires the unit to reverse.
    pub reversal: f64,
    /// Candidate is the unit's current floor.
    pub same_floor: f64,
    /// Scale of the occupancy penalty: `1 + load_penalty * load / capacity`.
    pub load_penalty: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            along_direction: 0.9,
            reversal:        1.2,
            same_floor:      0.7,
            load_penalty:    0.5,
        }
    }
}

// ── DispatchTrigger ───────────────────────────────────────────────────────────

/// When the stepped driver runs a dispatch pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DispatchTrigger {
    /// Only on ticks where new demand was injected.
    #[default]
    OnArrival,
    /// Every tick, so deferred floors are retried promptly.
    EveryTick,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of floors including the ground floor.  Must be at least 2.
    pub floor_count: u32,

    /// One entry per elevator, in id order.  Every capacity must be positive.
    pub capacities: Vec<u32>,

    /// Driver steps to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical demand.
    pub seed: u64,

    /// Milliseconds between two ticks of one elevator (threaded runner), and
    /// the nominal duration of one tick (stepped driver).
    pub tick_interval_ms: u64,

    /// Milliseconds between two driver steps (threaded runner).
    pub step_interval_ms: u64,

    /// Chance per driver step that a new group of people calls an elevator.
    pub arrival_probability: f64,

    /// Smallest group size for one arrival.
    pub min_people: u32,

    /// Largest group size for one arrival (inclusive).
    pub max_people: u32,

    /// When the stepped driver runs a dispatch pass.
    pub dispatch: DispatchTrigger,

    /// Write a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Cost heuristic multipliers.
    pub cost: CostWeights,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floor_count:           10,
            capacities:            vec![5, 5, 10],
            total_ticks:           200,
            seed:                  42,
            tick_interval_ms:      100,
            step_interval_ms:      200,
            arrival_probability:   0.3,
            min_people:            1,
            max_people:            5,
            dispatch:              DispatchTrigger::OnArrival,
            output_interval_ticks: 1,
            cost:                  CostWeights::default(),
        }
    }
}

impl SimConfig {
    /// The topmost floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floor_count)
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_interval_ms)
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count < 2 {
            return Err(LiftError::Config(format!(
                "floor_count must be at least 2, got {}",
                self.floor_count
            )));
        }
        if self.capacities.is_empty() {
            return Err(LiftError::Config("at least one elevator is required".into()));
        }
        if let Some(i) = self.capacities.iter().position(|&c| c == 0) {
            return Err(LiftError::Config(format!("elevator {i} has zero capacity")));
        }
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(LiftError::Config(format!(
                "arrival_probability must be within [0, 1], got {}",
                self.arrival_probability
            )));
        }
        if self.min_people == 0 || self.min_people > self.max_people {
            return Err(LiftError::Config(format!(
                "people per arrival must satisfy 1 <= min <= max, got {}..={}",
                self.min_people, self.max_people
            )));
        }
        if self.tick_interval_ms == 0 || self.step_interval_ms == 0 {
            return Err(LiftError::Config("tick and step intervals must be positive".into()));
        }
        Ok(())
    }
}
