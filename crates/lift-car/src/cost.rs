//! Route-cost heuristic used by the dispatcher.
//!
//! # Formula
//!
//! ```text
//! cost = trunc(route_length(state + candidate) * direction_factor * load_factor)
//! load_factor = 1 + load_penalty * load / capacity
//! ```
//!
//! `route_length` is measured on a clone of the state with the candidate
//! queued by the normal acceptance rule, so the live state is never touched.
//! A full car costs [`Cost::UNBOUNDED`].

use std::fmt;

use lift_core::{CostWeights, ElevatorState, Floor};

use crate::CarState;

/// Integer dispatch cost.  Lower is better.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Cost(pub u32);

impl Cost {
    /// Sentinel for "cannot take this request".
    pub const UNBOUNDED: Cost = Cost(u32::MAX);

    #[inline]
    pub fn is_finite(self) -> bool {
        self != Self::UNBOUNDED
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("unbounded")
        }
    }
}

/// Cost for a car in `state` with `capacity` to take a request at
/// `candidate`.
pub fn estimate(state: &CarState, capacity: u32, candidate: Floor, weights: &CostWeights) -> Cost {
    if state.load >= capacity {
        return Cost::UNBOUNDED;
    }

    let mut what_if = state.clone();
    // `None` means served in place; the route is whatever is already queued.
    let _ = what_if.queue(candidate);
    let route = what_if.route_length() as f64;

    let direction = direction_factor(state, candidate, weights);
    let load      = 1.0 + weights.load_penalty * state.load as f64 / capacity as f64;

    Cost((route * direction * load) as u32)
}

fn direction_factor(state: &CarState, candidate: Floor, weights: &CostWeights) -> f64 {
    use std::cmp::Ordering::*;
    match (candidate.cmp(&state.position), state.state) {
        (Equal, _) => weights.same_floor,
        (Greater, ElevatorState::Ascending | ElevatorState::Idle) => weights.along_direction,
        (Less, ElevatorState::Descending | ElevatorState::Idle) => weights.along_direction,
        _ => weights.reversal,
    }
}
