//! The `Sim` struct and its step loop.

use std::sync::Arc;

use lift_core::{DispatchTrigger, SimClock, SimConfig, Tick};
use lift_demand::DemandSource;

use crate::{Building, RunHandle, RunSummary, SimObserver, SimResult, TickSummary, runner};

/// The deterministic, single-threaded driver.
///
/// Each step:
///
/// 1. Ask the [`DemandSource`] for this step's arrivals and inject them.
/// 2. Run a dispatch pass: only when something arrived
///    ([`DispatchTrigger::OnArrival`]) or on every step
///    ([`DispatchTrigger::EveryTick`]).
/// 3. Tick every elevator once, in id order.
/// 4. Report to the observer and advance the clock.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  For wall-clock,
/// one-thread-per-elevator operation use [`Sim::spawn`].
pub struct Sim<S: DemandSource> {
    /// Global configuration (floors, capacities, total steps, …).
    pub config: SimConfig,

    /// Simulation clock; tracks the current step and maps to nominal time.
    pub clock: SimClock,

    /// Demand board, elevators, and dispatcher.
    pub building: Arc<Building>,

    /// Where arrivals come from.
    pub source: S,

    pub(crate) totals: RunSummary,
}

impl<S: DemandSource> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.end_tick()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        log::info!(
            "running {} steps, {} elevators over {} floors",
            self.config.total_ticks,
            self.config.capacities.len(),
            self.config.floor_count,
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        let summary = self.summary();
        log::info!(
            "finished at {}: {} arrived, {} delivered, {} still waiting",
            self.clock,
            summary.arrived,
            summary.delivered,
            summary.final_waiting,
        );
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Totals so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            dispatch_passes: self.building.dispatch_passes(),
            final_waiting:   self.building.total_waiting(),
            ..self.totals
        }
    }

    /// Hand the building to one thread per elevator plus a driver thread.
    /// The run starts at step 0 of the configuration regardless of how far
    /// this `Sim` was stepped.
    pub fn spawn(self) -> SimResult<RunHandle>
    where
        S: 'static,
    {
        runner::spawn(self.config, self.building, self.source)
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Process one step and return its counters.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let mut summary = TickSummary {
            tick:       now,
            elapsed_ms: self.clock.elapsed_ms(),
            ..TickSummary::default()
        };

        // ── Arrivals ──────────────────────────────────────────────────────
        let arrivals = self.source.arrivals(now);
        for arrival in &arrivals {
            self.building.inject_demand(arrival.floor, arrival.people)?;
            summary.arrived += arrival.people;
        }
        if !arrivals.is_empty() {
            observer.on_arrivals(now, &arrivals);
        }

        // ── Dispatch ──────────────────────────────────────────────────────
        if should_dispatch(self.config.dispatch, !arrivals.is_empty()) {
            let report = self.building.dispatch_pass()?;
            summary.record_dispatch(&report);
            observer.on_dispatch(now, &report);
        }

        // ── Elevators ─────────────────────────────────────────────────────
        let outcomes = self.building.tick_all();
        for outcome in &outcomes {
            summary.record_outcome(outcome);
        }
        self.totals.elevator_ticks += outcomes.len() as u64;
        summary.waiting = self.building.total_waiting();

        observer.on_tick_end(&summary, &outcomes);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.building.snapshot());
        }

        self.totals.absorb(&summary);
        self.clock.advance();
        Ok(summary)
    }

    /// The step the next call to [`step`](Self::step) will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }
}

pub(crate) fn should_dispatch(trigger: DispatchTrigger, arrived: bool) -> bool {
    match trigger {
        DispatchTrigger::OnArrival => arrived,
        DispatchTrigger::EveryTick => true,
    }
}
