//! `lift-dispatch`: assigns waiting floors to elevators.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`dispatcher`] | `Dispatcher`: one scan-and-assign pass                  |
//! | [`report`]     | `Assignment`, `DispatchReport`                           |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                     |
//!
//! # Policy
//!
//! A pass scans floors from the top down.  For each floor with people
//! waiting it asks every unit for its [`Cost`][lift_car::Cost] and commits
//! the request to the first unit with the strictly smallest finite cost.
//! When every unit is full the floor is left alone and picked up again by
//! a later pass, since its waiting count stays positive.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Computes per-floor costs on Rayon's thread pool.         |

pub mod dispatcher;
pub mod error;
pub mod report;


pub use dispatcher::{Dispatcher, cheapest};
pub use error::{DispatchError, DispatchResult};
pub use report::{Assignment, DispatchReport};
