use lift_core::{ElevatorId, ElevatorState, Floor};

/// Read-only copy of one elevator, taken under its lock.
///
/// `down_stops` is listed highest first, i.e. in service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub id:         ElevatorId,
    pub capacity:   u32,
    pub position:   Floor,
    pub load:       u32,
    pub state:      ElevatorState,
    pub up_stops:   Vec<Floor>,
    pub down_stops: Vec<Floor>,
}

impl ElevatorSnapshot {
    #[inline]
    pub fn pending_stops(&self) -> usize {
        self.up_stops.len() + self.down_stops.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.load >= self.capacity
    }
}
