//! `ElevatorUnit`: a `CarState` behind its own lock.

use parking_lot::Mutex;

use lift_core::{CostWeights, ElevatorId, ElevatorState, Floor};
use lift_demand::FloorDemand;

use crate::{
    CarError, CarResult, CarState, Cost, ElevatorSnapshot, TickAction, TickOutcome, cost,
};

/// How an accepted request was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Queued in the stop set for `direction`.
    Queued { direction: ElevatorState },
    /// The car was idle at the floor and boarded `boarded` people at once.
    ServedHere { boarded: u32 },
}

/// One elevator: immutable identity plus lock-protected motion state.
///
/// Every method takes the unit lock for its whole duration, so a cost query
/// never observes half a tick.
pub struct ElevatorUnit {
    id:       ElevatorId,
    capacity: u32,
    top:      Floor,
    weights:  CostWeights,
    car:      Mutex<CarState>,
}

impl ElevatorUnit {
    /// A new unit idle at the ground floor.
    pub fn new(id: ElevatorId, capacity: u32, top: Floor, weights: CostWeights) -> Self {
        Self::with_state(id, capacity, top, weights, CarState::new())
    }

    /// A unit starting from an arbitrary state (replays, tests).
    pub fn with_state(
        id:       ElevatorId,
        capacity: u32,
        top:      Floor,
        weights:  CostWeights,
        state:    CarState,
    ) -> Self {
        Self { id, capacity, top, weights, car: Mutex::new(state) }
    }

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn position(&self) -> Floor {
        self.car.lock().position
    }

    pub fn load(&self) -> u32 {
        self.car.lock().load
    }

    pub fn state(&self) -> ElevatorState {
        self.car.lock().state
    }

    /// Copy of the full motion state.
    pub fn car_state(&self) -> CarState {
        self.car.lock().clone()
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        let car = self.car.lock();
        ElevatorSnapshot {
            id:         self.id,
            capacity:   self.capacity,
            position:   car.position,
            load:       car.load,
            state:      car.state,
            up_stops:   car.up_stops.iter().copied().collect(),
            down_stops: car.down_stops.iter().rev().copied().collect(),
        }
    }

    /// What taking a request at `floor` would cost.  Leaves the unit
    /// untouched.
    pub fn estimate_cost(&self, floor: Floor) -> Cost {
        let car = self.car.lock();
        cost::estimate(&car, self.capacity, floor, &self.weights)
    }

    /// Commit a request at `floor`.
    ///
    /// `demand` must be the guard of the shared demand lock; it is only
    /// touched when the car is idle at `floor` and boards on the spot.
    ///
    /// # Errors
    ///
    /// [`CarError::FloorOutOfRange`] if `floor` is not in `1..=top`.
    pub fn accept_request(&self, floor: Floor, demand: &mut FloorDemand) -> CarResult<Acceptance> {
        if !floor.within(self.top) {
            return Err(CarError::FloorOutOfRange { elevator: self.id, floor, top: self.top });
        }
        let mut car = self.car.lock();
        match car.queue(floor) {
            Some(direction) => {
                log::debug!("{} queued {floor} ({direction})", self.id);
                Ok(Acceptance::Queued { direction })
            }
            None => {
                let moved = car.pickup(floor, self.capacity, demand);
                log::debug!("{} served {floor} in place, {} boarded", self.id, moved.boarded);
                Ok(Acceptance::ServedHere { boarded: moved.boarded })
            }
        }
    }

    /// One discrete step.  `demand` must be the guard of the shared demand
    /// lock.
    pub fn tick(&self, demand: &mut FloorDemand) -> TickOutcome {
        let mut car = self.car.lock();
        let from = car.position;
        let (action, moved) = car.step(self.capacity, demand);
        let outcome = TickOutcome {
            elevator:   self.id,
            from,
            to:         car.position,
            action,
            boarded:    moved.boarded,
            discharged: moved.discharged,
        };
        drop(car);

        match action {
            TickAction::SkippedStale { floor } => {
                log::debug!("{} dropped stale stop at {floor}", self.id);
            }
            TickAction::ReturnedHome => {
                log::debug!("{} home, {} discharged", self.id, outcome.discharged);
            }
            _ if outcome.moved() => {
                log::trace!("{} {} -> {} ({action:?})", self.id, outcome.from, outcome.to);
            }
            _ => {}
        }
        if outcome.boarded > 0 {
            log::debug!("{} boarded {} at {}", self.id, outcome.boarded, outcome.to);
        }
        outcome
    }
}
