//! Strongly typed elevator identifier.
//!
//! `ElevatorId` is `Copy + Ord + Hash` so it can be used as a map key and a
//! sorted collection element without ceremony.  The inner integer is the
//! elevator's index in the building's unit list; prefer `.index()` over
//! `id.0 as usize` at call sites.

use std::fmt;

/// Index of an elevator in the building.  Assigned once at startup.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorId(pub u32);

impl ElevatorId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}
