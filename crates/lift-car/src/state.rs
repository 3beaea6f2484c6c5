//! Per-elevator motion state and the rules that mutate it.
//!
//! `CarState` is a plain value.  The cost model clones it and plays "what
//! if" on the copy, so nothing here knows about locks.

use std::collections::BTreeSet;

use lift_core::{ElevatorState, Floor};
use lift_demand::FloorDemand;

use crate::TickAction;

/// People moved by one pickup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transfer {
    /// Boarded from a hall floor.
    pub boarded: u32,
    /// Left the car at the ground floor.
    pub discharged: u32,
}

impl Transfer {
    fn add(&mut self, other: Transfer) {
        self.boarded    += other.boarded;
        self.discharged += other.discharged;
    }
}

/// Mutable state of one elevator.
///
/// A floor is in at most one of the two stop sets: [`queue`](Self::queue)
/// removes it from the other set when inserting.  `state == Idle` only while
/// both sets are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarState {
    pub position:   Floor,
    pub load:       u32,
    pub state:      ElevatorState,
    /// Floors to serve while ascending; iterated lowest first.
    pub up_stops:   BTreeSet<Floor>,
    /// Floors to serve while descending; iterated highest first.
    pub down_stops: BTreeSet<Floor>,
}

impl Default for CarState {
    fn default() -> Self {
        Self::new()
    }
}

impl CarState {
    /// Idle and empty at the ground floor.
    pub fn new() -> Self {
        Self {
            position:   Floor::GROUND,
            load:       0,
            state:      ElevatorState::Idle,
            up_stops:   BTreeSet::new(),
            down_stops: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn has_stops(&self) -> bool {
        !self.up_stops.is_empty() || !self.down_stops.is_empty()
    }

    #[inline]
    pub fn pending_stops(&self) -> usize {
        self.up_stops.len() + self.down_stops.len()
    }

    /// The direction being served: ascending while `Ascending`, or while
    /// `Idle` with ascending stops queued; descending otherwise.
    pub fn effective_direction(&self) -> ElevatorState {
        match self.state {
            ElevatorState::Ascending => ElevatorState::Ascending,
            ElevatorState::Idle if !self.up_stops.is_empty() => ElevatorState::Ascending,
            _ => ElevatorState::Descending,
        }
    }

    fn stops(&self, direction: ElevatorState) -> &BTreeSet<Floor> {
        match direction {
            ElevatorState::Ascending => &self.up_stops,
            _ => &self.down_stops,
        }
    }

    fn stops_mut(&mut self, direction: ElevatorState) -> &mut BTreeSet<Floor> {
        match direction {
            ElevatorState::Ascending => &mut self.up_stops,
            _ => &mut self.down_stops,
        }
    }

    /// Next stop in `direction`'s service order.
    fn next_stop(&self, direction: ElevatorState) -> Option<Floor> {
        match direction {
            ElevatorState::Ascending => self.up_stops.first().copied(),
            _ => self.down_stops.last().copied(),
        }
    }

    fn insert_stop(&mut self, floor: Floor, direction: ElevatorState) {
        self.stops_mut(direction.reversed()).remove(&floor);
        self.stops_mut(direction).insert(floor);
    }

    // ── Acceptance ───────────────────────────────────────────────────────────

    /// Apply the acceptance rule for a request at `floor`, without picking
    /// anyone up.
    ///
    /// Returns the stop set the floor was queued in, or `None` when the car
    /// is idle at that very floor and should serve it on the spot.
    pub fn queue(&mut self, floor: Floor) -> Option<ElevatorState> {
        let direction = match self.state {
            ElevatorState::Idle => match floor.cmp(&self.position) {
                std::cmp::Ordering::Equal   => return None,
                std::cmp::Ordering::Greater => ElevatorState::Ascending,
                std::cmp::Ordering::Less    => ElevatorState::Descending,
            },
            ElevatorState::Ascending if floor >= self.position => ElevatorState::Ascending,
            ElevatorState::Ascending => ElevatorState::Descending,
            ElevatorState::Descending if floor <= self.position => ElevatorState::Descending,
            ElevatorState::Descending => ElevatorState::Ascending,
        };
        if self.state == ElevatorState::Idle {
            self.state = direction;
        }
        self.insert_stop(floor, direction);
        Some(direction)
    }

    // ── Pickup ───────────────────────────────────────────────────────────────

    /// Exchange passengers at `floor`.
    ///
    /// The ground floor discharges everyone.  Any other floor boards
    /// `min(capacity - load, waiting)` people.
    pub fn pickup(&mut self, floor: Floor, capacity: u32, demand: &mut FloorDemand) -> Transfer {
        if floor.is_ground() {
            let discharged = self.load;
            self.load = 0;
            return Transfer { boarded: 0, discharged };
        }
        let room = capacity.saturating_sub(self.load);
        if room == 0 {
            return Transfer::default();
        }
        let boarded = demand.take(floor, room);
        self.load += boarded;
        Transfer { boarded, discharged: 0 }
    }

    // ── Route ────────────────────────────────────────────────────────────────

    /// Floors travelled to serve every queued stop and then return to the
    /// ground floor: the effective direction's set first in natural order,
    /// then the opposite set.
    pub fn route_length(&self) -> u32 {
        let mut at    = self.position;
        let mut total = 0u32;
        let mut visit = |floor: Floor| {
            total += at.distance(floor);
            at = floor;
        };
        match self.effective_direction() {
            ElevatorState::Ascending => {
                self.up_stops.iter().copied().for_each(&mut visit);
                self.down_stops.iter().rev().copied().for_each(&mut visit);
            }
            _ => {
                self.down_stops.iter().rev().copied().for_each(&mut visit);
                self.up_stops.iter().copied().for_each(&mut visit);
            }
        }
        visit(Floor::GROUND);
        total
    }

    // ── Tick ─────────────────────────────────────────────────────────────────

    /// Advance one discrete step.
    pub fn step(&mut self, capacity: u32, demand: &mut FloorDemand) -> (TickAction, Transfer) {
        let mut moved = Transfer::default();

        if !self.has_stops() {
            if self.position.is_ground() {
                self.state = ElevatorState::Idle;
                return (TickAction::Parked, moved);
            }
            self.state    = ElevatorState::Descending;
            self.position = self.position.step_toward(Floor::GROUND);
            if !self.position.is_ground() {
                return (TickAction::Homing, moved);
            }
            moved.add(self.pickup(Floor::GROUND, capacity, demand));
            self.state = ElevatorState::Idle;
            return (TickAction::ReturnedHome, moved);
        }

        let mut direction = self.effective_direction();
        if self.stops(direction).is_empty() {
            direction = direction.reversed();
        }
        self.state = direction;

        let Some(target) = self.next_stop(direction) else {
            return (TickAction::Parked, moved);
        };

        // A stale stop is dropped without moving; the pickup below still runs.
        let stale = demand.waiting(target) == 0;
        let mut action = if stale {
            self.stops_mut(direction).remove(&target);
            TickAction::SkippedStale { floor: target }
        } else {
            self.position = self.position.step_toward(target);
            TickAction::Moving { target }
        };

        if !stale && self.position == target {
            self.stops_mut(direction).remove(&target);
            moved.add(self.pickup(target, capacity, demand));
            let vacated_empty = self.stops(direction).is_empty();
            let opposite_empty = self.stops(direction.reversed()).is_empty();
            if vacated_empty && !opposite_empty {
                self.state = direction.reversed();
            } else if vacated_empty {
                // Nothing left; the next tick starts the trip home.
                self.state = if self.position.is_ground() {
                    ElevatorState::Idle
                } else {
                    ElevatorState::Descending
                };
            }
            action = TickAction::Arrived { floor: target };
        }

        if self.state == ElevatorState::Descending && !self.position.is_ground() {
            moved.add(self.pickup(self.position, capacity, demand));
        }

        (action, moved)
    }
}
