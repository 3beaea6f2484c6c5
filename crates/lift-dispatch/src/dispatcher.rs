//! The scan-and-assign pass.

use std::sync::atomic::{AtomicU64, Ordering};

use lift_car::{Cost, ElevatorUnit};
use lift_core::Floor;
use lift_demand::FloorDemand;

use crate::{Assignment, DispatchError, DispatchReport, DispatchResult};

/// Runs dispatch passes and counts them.
///
/// Holds no assignment state: everything a pass needs is in the demand
/// counters and the units.  `&self` so the threaded runner can share it.
#[derive(Debug, Default)]
pub struct Dispatcher {
    passes: AtomicU64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes.load(Ordering::Relaxed)
    }

    /// One pass over every hall floor, top floor first.
    ///
    /// `demand` is the guard of the shared demand lock and stays held for
    /// the whole scan.  Each unit lock is taken only for the duration of a
    /// single cost query or commit.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoElevators`] for an empty `units` slice; otherwise
    /// whatever [`ElevatorUnit::accept_request`] reports.
    pub fn dispatch_pass(
        &self,
        demand: &mut FloorDemand,
        units:  &[ElevatorUnit],
    ) -> DispatchResult<DispatchReport> {
        if units.is_empty() {
            return Err(DispatchError::NoElevators);
        }
        self.passes.fetch_add(1, Ordering::Relaxed);

        let mut report = DispatchReport::default();
        for (floor, waiting) in demand.floors_with_demand() {
            let Some((index, cost)) = cheapest(units, floor) else {
                log::debug!("{floor}: {waiting} waiting, every elevator full; deferred");
                report.deferred.push(floor);
                continue;
            };
            let unit = &units[index];
            let acceptance = unit.accept_request(floor, demand)?;
            log::debug!("{floor} -> {} (cost {cost}, {waiting} waiting)", unit.id());
            report.assignments.push(Assignment {
                floor,
                elevator: unit.id(),
                cost,
                acceptance,
            });
        }
        Ok(report)
    }
}

/// Index and cost of the unit with the strictly smallest finite cost for
/// `floor`.  On a tie the earlier unit wins.  `None` if every unit reports
/// [`Cost::UNBOUNDED`].
pub fn cheapest(units: &[ElevatorUnit], floor: Floor) -> Option<(usize, Cost)> {
    costs(units, floor)
        .into_iter()
        .enumerate()
        .filter(|(_, cost)| cost.is_finite())
        .fold(None, |best, (i, cost)| match best {
            Some((_, b)) if b <= cost => best,
            _ => Some((i, cost)),
        })
}

fn costs(units: &[ElevatorUnit], floor: Floor) -> Vec<Cost> {
    #[cfg(not(feature = "parallel"))]
    {
        units.iter().map(|u| u.estimate_cost(floor)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed collect keeps unit order.
        units.par_iter().map(|u| u.estimate_cost(floor)).collect()
    }
}
