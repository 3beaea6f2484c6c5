//! `lift-sim`: drives a building of elevators.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.total_ticks:
//!   ① Arrivals : DemandSource::arrivals(step) injected into the demand board.
//!   ② Dispatch : one top-down scan-and-assign pass (on arrival, or every
//!                 step, per DispatchTrigger).
//!   ③ Elevators: every unit ticks once, in id order.
//!   ④ Observe  : on_tick_end, then on_snapshot at the output interval.
//! ```
//!
//! [`Sim::spawn`] runs the same building on real threads instead: one per
//! elevator plus a driver, all stopped by a shared flag (see [`runner`]).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Dispatch cost queries run on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::random(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.summary());
//! ```

pub mod building;
pub mod builder;
pub mod error;
pub mod observer;
pub mod runner;
pub mod sim;
pub mod snapshot;
pub mod summary;


pub use building::Building;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use runner::{EVENT_BUFFER, RunHandle, SimEvent};
pub use sim::Sim;
pub use snapshot::BuildingSnapshot;
pub use summary::{RunSummary, TickSummary};
