//! `lift-demand`: who is waiting where, and where new people come from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`demand`]  | `FloorDemand` (counters), `SharedDemand` (the locked board)  |
//! | [`source`]  | `Arrival`, `DemandSource` trait, `RandomArrivals`, `NoArrivals` |
//! | [`script`]  | `ScriptedArrivals` (`BTreeMap<Tick, Vec<Arrival>>`)          |
//! | [`loader`]  | `load_script_csv`, `load_script_reader`                     |
//! | [`error`]   | `DemandError`, `DemandResult<T>`                             |
//!
//! # Lock discipline
//!
//! `SharedDemand` is the single exclusive lock around every waiting
//! counter.  Elevators, the dispatcher and the demand injector all go through
//! it.  Anything that also needs an elevator's lock must take this one
//! first; the `lift-car` API enforces that by asking for `&mut FloorDemand`
//! (i.e. a held guard) rather than locking internally.

pub mod demand;
pub mod error;
pub mod loader;
pub mod script;
pub mod source;


pub use demand::{FloorDemand, SharedDemand};
pub use error::{DemandError, DemandResult};
pub use loader::{load_script_csv, load_script_reader};
pub use script::ScriptedArrivals;
pub use source::{Arrival, DemandSource, NoArrivals, RandomArrivals};
