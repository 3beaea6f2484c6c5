//! What a single tick did, for observers and output rows.

use lift_core::{ElevatorId, Floor};

/// The kind of step an elevator took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// At the ground floor with nothing to do.
    Parked,
    /// No stops left; moved one floor toward the ground floor.
    Homing,
    /// Moved one floor toward `target` without reaching it.
    Moving { target: Floor },
    /// Reached a queued stop and exchanged passengers there.
    Arrived { floor: Floor },
    /// Dropped a queued stop nobody is waiting at any more.  The car did
    /// not move.
    SkippedStale { floor: Floor },
    /// Reached the ground floor while homing and discharged everyone.
    ReturnedHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub elevator:   ElevatorId,
    pub from:       Floor,
    pub to:         Floor,
    pub action:     TickAction,
    pub boarded:    u32,
    pub discharged: u32,
}

impl TickOutcome {
    #[inline]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}
