use lift_car::ElevatorSnapshot;
use lift_core::Floor;

/// Every elevator plus every hall floor's waiting count, taken together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingSnapshot {
    pub elevators: Vec<ElevatorSnapshot>,
    /// `(floor, waiting)`, lowest hall floor first.
    pub waiting:   Vec<(Floor, u32)>,
}

impl BuildingSnapshot {
    pub fn total_waiting(&self) -> u64 {
        self.waiting.iter().map(|&(_, w)| w as u64).sum()
    }

    pub fn total_load(&self) -> u64 {
        self.elevators.iter().map(|e| e.load as u64).sum()
    }
}
