//! Elevator motion state shared across the car, dispatch and output crates.

/// What an elevator is currently doing.
///
/// `Idle` means parked with no pending stops.  The two moving states also
/// name the *effective direction* the elevator is serving, which is what the
/// acceptance rule and the cost model key off.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElevatorState {
    #[default]
    Idle,
    Ascending,
    Descending,
}

impl ElevatorState {
    /// The opposite travel direction.  `Idle` has no opposite.
    #[inline]
    pub fn reversed(self) -> ElevatorState {
        match self {
            ElevatorState::Idle       => ElevatorState::Idle,
            ElevatorState::Ascending  => ElevatorState::Descending,
            ElevatorState::Descending => ElevatorState::Ascending,
        }
    }

    /// Human-readable label, used for CSV / SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorState::Idle       => "idle",
            ElevatorState::Ascending  => "ascending",
            ElevatorState::Descending => "descending",
        }
    }
}

impl std::fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
