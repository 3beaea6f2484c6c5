//! `Building`: the demand board, the elevators, and the dispatcher.
//!
//! This is the whole surface a driver needs: inject demand, run a dispatch
//! pass, tick a unit, and read snapshots.  Every method takes `&self`, so a
//! `Building` behind an `Arc` can be driven from several threads at once.
//!
//! # Lock order
//!
//! The demand lock is always taken first, then at most one unit lock at a
//! time.  `ElevatorUnit` enforces the second half by taking the demand guard
//! as a parameter.

use lift_car::{CarState, ElevatorUnit, TickOutcome};
use lift_core::{ElevatorId, Floor, SimConfig};
use lift_demand::SharedDemand;
use lift_dispatch::{DispatchReport, Dispatcher};

use crate::{BuildingSnapshot, SimError, SimResult};

pub struct Building {
    demand:     SharedDemand,
    elevators:  Vec<ElevatorUnit>,
    dispatcher: Dispatcher,
}

impl Building {
    /// Validate `config` and build its elevators idle at the ground floor.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        let states = vec![CarState::new(); config.capacities.len()];
        Self::with_states(config, states)
    }

    /// Like [`from_config`](Self::from_config) but starting each elevator
    /// from the matching entry of `states`.
    pub fn with_states(config: &SimConfig, states: Vec<CarState>) -> SimResult<Self> {
        config.validate()?;
        if states.len() != config.capacities.len() {
            return Err(SimError::ElevatorCountMismatch {
                expected: config.capacities.len(),
                got:      states.len(),
            });
        }
        let top = config.top_floor();
        let elevators = config
            .capacities
            .iter()
            .zip(states)
            .enumerate()
            .map(|(i, (&capacity, state))| {
                ElevatorUnit::with_state(ElevatorId(i as u32), capacity, top, config.cost, state)
            })
            .collect();
        Ok(Self {
            demand: SharedDemand::new(config.floor_count),
            elevators,
            dispatcher: Dispatcher::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn top_floor(&self) -> Floor {
        self.demand.top_floor()
    }

    #[inline]
    pub fn elevators(&self) -> &[ElevatorUnit] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> SimResult<&ElevatorUnit> {
        self.elevators.get(id.index()).ok_or(SimError::ElevatorNotFound(id))
    }

    /// Dispatch passes run so far.
    pub fn dispatch_passes(&self) -> u64 {
        self.dispatcher.passes()
    }

    // ── Driver interface ──────────────────────────────────────────────────

    /// Add `people` waiting at `floor`; returns the new count there.
    pub fn inject_demand(&self, floor: Floor, people: u32) -> SimResult<u32> {
        Ok(self.demand.inject(floor, people)?)
    }

    /// One scan-and-assign pass under the demand lock.
    pub fn dispatch_pass(&self) -> SimResult<DispatchReport> {
        let mut demand = self.demand.lock();
        Ok(self.dispatcher.dispatch_pass(&mut demand, &self.elevators)?)
    }

    /// Advance elevator `id` by one step.
    pub fn tick(&self, id: ElevatorId) -> SimResult<TickOutcome> {
        let unit = self.elevator(id)?;
        let mut demand = self.demand.lock();
        Ok(unit.tick(&mut demand))
    }

    /// Advance every elevator by one step, in id order.
    pub fn tick_all(&self) -> Vec<TickOutcome> {
        self.elevators
            .iter()
            .map(|unit| {
                let mut demand = self.demand.lock();
                unit.tick(&mut demand)
            })
            .collect()
    }

    // ── Observation ───────────────────────────────────────────────────────

    pub fn waiting(&self, floor: Floor) -> u32 {
        self.demand.waiting(floor)
    }

    /// `(floor, waiting)` for every hall floor, lowest first.
    pub fn waiting_by_floor(&self) -> Vec<(Floor, u32)> {
        self.demand.lock().iter().collect()
    }

    pub fn total_waiting(&self) -> u64 {
        self.demand.lock().total_waiting()
    }

    /// Consistent view of the whole building.  Holds the demand lock while
    /// copying each unit in turn.
    pub fn snapshot(&self) -> BuildingSnapshot {
        let demand = self.demand.lock();
        BuildingSnapshot {
            elevators: self.elevators.iter().map(ElevatorUnit::snapshot).collect(),
            waiting:   demand.iter().collect(),
        }
    }
}
