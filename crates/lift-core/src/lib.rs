//! `lift-core`: foundational types for the `rust_lift` dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `ElevatorId`                                            |
//! | [`floor`]     | `Floor` (1-based, floor 1 is the ground/home floor)     |
//! | [`state`]     | `ElevatorState` (`Idle`, `Ascending`, `Descending`)     |
//! | [`time`]      | `Tick`, `SimClock`                                      |
//! | [`config`]    | `SimConfig`, `CostWeights`, `DispatchTrigger`           |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                        |
//! | [`error`]     | `LiftError`, `LiftResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CostWeights, DispatchTrigger, SimConfig};
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::ElevatorId;
pub use rng::SimRng;
pub use state::ElevatorState;
pub use time::{SimClock, Tick};
