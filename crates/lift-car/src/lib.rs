//! `lift-car`: one elevator's state machine, cost model, and lock.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`state`]    | `CarState`: position, load, direction, stop sets; tick rules    |
//! | [`cost`]     | `Cost`, `estimate`: what-if route length scaled by heuristics   |
//! | [`unit`]     | `ElevatorUnit`: `CarState` behind a per-unit `parking_lot` lock |
//! | [`outcome`]  | `TickOutcome`, `TickAction`: what one tick did                  |
//! | [`snapshot`] | `ElevatorSnapshot`: read-only copy for observers                |
//! | [`error`]    | `CarError`, `CarResult<T>`                                       |
//!
//! # Movement model
//!
//! An elevator moves at most one floor per tick.  It serves the stop set of
//! its effective direction in natural order (ascending floors upward,
//! descending floors downward), reverses when that set runs dry, and drifts
//! back to the ground floor once both sets are empty, discharging everyone
//! on arrival.
//!
//! # Locking
//!
//! Every `ElevatorUnit` method that touches the shared
//! [`FloorDemand`][lift_demand::FloorDemand] takes it as `&mut`, i.e. the
//! caller already holds the demand lock.  The unit lock is taken inside.
//! That makes "demand before unit" the only order the API can express.

pub mod cost;
pub mod error;
pub mod outcome;
pub mod snapshot;
pub mod state;
pub mod unit;

#[cfg(test)]
mod tests;

pub use cost::{Cost, estimate};
pub use error::{CarError, CarResult};
pub use outcome::{TickAction, TickOutcome};
pub use snapshot::ElevatorSnapshot;
pub use state::{CarState, Transfer};
pub use unit::{Acceptance, ElevatorUnit};
