//! Results of one dispatch pass.

use lift_car::{Acceptance, Cost};
use lift_core::{ElevatorId, Floor};

/// One committed floor-to-elevator decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub floor:      Floor,
    pub elevator:   ElevatorId,
    pub cost:       Cost,
    pub acceptance: Acceptance,
}

/// Everything a pass decided, in scan order (top floor first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub assignments: Vec<Assignment>,
    /// Floors with people waiting that no unit could take.
    pub deferred:    Vec<Floor>,
}

impl DispatchReport {
    /// `true` when the pass found nothing to do.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() && self.deferred.is_empty()
    }

    /// People boarded on the spot by units idle at an assigned floor.
    pub fn boarded_in_place(&self) -> u32 {
        self.assignments
            .iter()
            .map(|a| match a.acceptance {
                Acceptance::ServedHere { boarded } => boarded,
                Acceptance::Queued { .. } => 0,
            })
            .sum()
    }

    /// The unit assigned to `floor` in this pass, if any.
    pub fn assigned_to(&self, floor: Floor) -> Option<ElevatorId> {
        self.assignments.iter().find(|a| a.floor == floor).map(|a| a.elevator)
    }
}
