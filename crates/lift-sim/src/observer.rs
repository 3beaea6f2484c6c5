//! Simulation observer trait for progress reporting and data collection.

use lift_car::TickOutcome;
use lift_core::Tick;
use lift_demand::Arrival;
use lift_dispatch::DispatchReport;

use crate::{BuildingSnapshot, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary, _outcomes: &[TickOutcome]) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} waiting", summary.tick, summary.waiting);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after this step's arrivals were injected.  Not called for
    /// steps without arrivals.
    fn on_arrivals(&mut self, _tick: Tick, _arrivals: &[Arrival]) {}

    /// Called after each dispatch pass.
    fn on_dispatch(&mut self, _tick: Tick, _report: &DispatchReport) {}

    /// Called once every unit has ticked.  `outcomes` is in elevator id
    /// order.
    fn on_tick_end(&mut self, _summary: &TickSummary, _outcomes: &[TickOutcome]) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// steps).
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &BuildingSnapshot) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
