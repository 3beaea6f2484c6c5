//! Floor numbers.
//!
//! Floors are 1-based.  Floor 1 is the ground (home) floor: elevators park
//! there, passengers are discharged there, and nobody ever waits there.

use std::fmt;

/// A floor of the building.  `Floor(1)` is the ground floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(1);

    #[inline]
    pub fn is_ground(self) -> bool {
        self == Self::GROUND
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step from `self` toward `target` (or `self` if already
    /// there).
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match self.cmp(&target) {
            std::cmp::Ordering::Less    => Floor(self.0 + 1),
            std::cmp::Ordering::Greater => Floor(self.0 - 1),
            std::cmp::Ordering::Equal   => self,
        }
    }

    /// `true` if `self` lies in `1..=top`.
    #[inline]
    pub fn within(self, top: Floor) -> bool {
        self.0 >= Self::GROUND.0 && self <= top
    }
}

impl Default for Floor {
    fn default() -> Self {
        Self::GROUND
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}", self.0)
    }
}
