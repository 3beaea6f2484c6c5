//! Per-floor waiting counters.

use parking_lot::{Mutex, MutexGuard};

use lift_core::Floor;

use crate::{DemandError, DemandResult};

// ── FloorDemand ───────────────────────────────────────────────────────────────

/// How many people are waiting on each hall floor (every floor but the
/// ground floor).
///
/// Counters are `u32`, so "never negative" holds by construction: [`take`]
/// clamps to what is actually there.  Reads and takes outside the hall floors
/// are no-ops returning 0; injections outside them fail fast.
///
/// [`take`]: FloorDemand::take
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorDemand {
    top: Floor,
    /// `waiting[i]` is the count for floor `i + 2`.
    waiting: Vec<u32>,
}

impl FloorDemand {
    /// Empty counters for a building with `floor_count` floors.
    pub fn new(floor_count: u32) -> Self {
        Self {
            top:     Floor(floor_count.max(1)),
            waiting: vec![0; floor_count.saturating_sub(1) as usize],
        }
    }

    #[inline]
    pub fn top_floor(&self) -> Floor {
        self.top
    }

    #[inline]
    fn slot(&self, floor: Floor) -> Option<usize> {
        if floor.0 >= 2 && floor <= self.top {
            Some((floor.0 - 2) as usize)
        } else {
            None
        }
    }

    /// People waiting at `floor`.  0 for the ground floor and out-of-range
    /// floors.
    #[inline]
    pub fn waiting(&self, floor: Floor) -> u32 {
        self.slot(floor).map_or(0, |i| self.waiting[i])
    }

    /// Add `people` to `floor` and return the new count.
    ///
    /// # Errors
    ///
    /// [`DemandError::InvalidFloor`] if `floor` is the ground floor or above
    /// the top floor.
    pub fn inject(&mut self, floor: Floor, people: u32) -> DemandResult<u32> {
        let i = self.slot(floor).ok_or(DemandError::InvalidFloor {
            floor,
            top: self.top,
        })?;
        self.waiting[i] = self.waiting[i].saturating_add(people);
        Ok(self.waiting[i])
    }

    /// Remove up to `max` people from `floor` and return how many were
    /// actually removed.
    pub fn take(&mut self, floor: Floor, max: u32) -> u32 {
        let Some(i) = self.slot(floor) else {
            return 0;
        };
        let taken = self.waiting[i].min(max);
        self.waiting[i] -= taken;
        taken
    }

    /// Sum over all floors.
    pub fn total_waiting(&self) -> u64 {
        self.waiting.iter().map(|&w| w as u64).sum()
    }

    /// `(floor, waiting)` for every hall floor, ground+1 upward.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Floor, u32)> + '_ {
        self.waiting
            .iter()
            .enumerate()
            .map(|(i, &w)| (Floor(i as u32 + 2), w))
    }

    /// Floors with at least one person waiting, scanned from the top floor
    /// down.  This is the dispatcher's scan order.
    pub fn floors_with_demand(&self) -> Vec<(Floor, u32)> {
        self.iter().rev().filter(|&(_, w)| w > 0).collect()
    }
}

// ── SharedDemand ──────────────────────────────────────────────────────────────

/// The one lock around [`FloorDemand`], shared by every participant.
///
/// Hold the guard from [`lock`](Self::lock) for a whole dispatch scan or a
/// whole elevator tick.  The convenience methods lock for a single call.
pub struct SharedDemand {
    top:   Floor,
    inner: Mutex<FloorDemand>,
}

impl SharedDemand {
    pub fn new(floor_count: u32) -> Self {
        let demand = FloorDemand::new(floor_count);
        Self {
            top:   demand.top_floor(),
            inner: Mutex::new(demand),
        }
    }

    /// The topmost floor.  Immutable, so no lock is taken.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        self.top
    }

    /// Take the exclusive lock.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, FloorDemand> {
        self.inner.lock()
    }

    /// Add `people` to `floor` under the lock and return the new count.
    pub fn inject(&self, floor: Floor, people: u32) -> DemandResult<u32> {
        let now_waiting = self.lock().inject(floor, people)?;
        log::debug!("{people} people called at {floor}; {now_waiting} waiting there");
        Ok(now_waiting)
    }

    /// People waiting at `floor`.
    pub fn waiting(&self, floor: Floor) -> u32 {
        self.lock().waiting(floor)
    }

    /// Consistent copy of every counter.
    pub fn snapshot(&self) -> FloorDemand {
        self.lock().clone()
    }
}
