//! Plain data row types written by output backends.

use lift_car::ElevatorSnapshot;
use lift_core::{ElevatorState, Tick};
use lift_sim::TickSummary;

/// One elevator at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub elevator_id:   u32,
    pub tick:          u64,
    pub floor:         u32,
    pub load:          u32,
    pub capacity:      u32,
    pub state:         ElevatorState,
    /// Stops queued in both directions.
    pub pending_stops: u32,
}

impl ElevatorSnapshotRow {
    pub fn new(tick: Tick, snap: &ElevatorSnapshot) -> Self {
        Self {
            elevator_id:   snap.id.0,
            tick:          tick.0,
            floor:         snap.position.0,
            load:          snap.load,
            capacity:      snap.capacity,
            state:         snap.state,
            pending_stops: snap.pending_stops() as u32,
        }
    }
}

/// Counters for one driver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub elapsed_ms:  u64,
    pub waiting:     u64,
    pub boarded:     u32,
    pub delivered:   u32,
    pub assignments: u32,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:        s.tick.0,
            elapsed_ms:  s.elapsed_ms,
            waiting:     s.waiting,
            boarded:     s.boarded,
            delivered:   s.delivered,
            assignments: s.assignments as u32,
        }
    }
}
