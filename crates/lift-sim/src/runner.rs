//! Threaded runner: one OS thread per elevator plus one driver thread.
//!
//! Every thread loops on a shared `AtomicBool`.  A unit thread ticks its
//! elevator and sleeps `tick_interval_ms`; the driver injects arrivals,
//! dispatches, and sleeps `step_interval_ms` for `total_ticks` steps, then
//! clears the flag itself.  Stopping is cooperative: a tick in flight
//! finishes before its thread sees the flag.
//!
//! Progress streams out over a `crossbeam-channel` bounded at
//! [`EVENT_BUFFER`].  Nobody is required to read it: runner threads never
//! block on a send, so once the buffer is full new events are dropped until
//! the reader catches up.  Dropping a [`RunHandle`] without stopping it
//! detaches the threads; they exit on their own once the driver runs out of
//! steps.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

use lift_car::{TickAction, TickOutcome};
use lift_core::{ElevatorId, SimConfig, Tick};
use lift_demand::{Arrival, DemandSource};
use lift_dispatch::DispatchReport;

use crate::{Building, RunSummary, SimError, SimResult, sim::should_dispatch};

/// Events held for the reader before new ones are dropped.
pub const EVENT_BUFFER: usize = 1024;

/// Something that happened on a runner thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    /// The driver injected `arrivals` at `step`.
    Arrivals { step: Tick, arrivals: Vec<Arrival> },
    /// The driver ran a dispatch pass at `step`.
    Dispatched { step: Tick, report: DispatchReport },
    /// A unit did something other than stay parked.
    Ticked(TickOutcome),
    /// The driver completed `steps` steps and cleared the running flag.
    Finished { steps: u64 },
}

#[derive(Default)]
struct DriverTotals {
    steps:       u64,
    arrived:     u64,
    assignments: u64,
    /// Boarded in place while dispatching.
    boarded:     u64,
}

#[derive(Default)]
struct UnitTotals {
    ticks:     u64,
    boarded:   u64,
    delivered: u64,
}

/// Control over a spawned run.
pub struct RunHandle {
    running:  Arc<AtomicBool>,
    building: Arc<Building>,
    events:   Receiver<SimEvent>,
    driver:   JoinHandle<SimResult<DriverTotals>>,
    units:    Vec<JoinHandle<UnitTotals>>,
}

impl RunHandle {
    /// The live building, for observation while the run is going.
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Event stream from every runner thread.  Holds at most
    /// [`EVENT_BUFFER`] unread events; later ones are dropped.
    pub fn events(&self) -> &Receiver<SimEvent> {
        &self.events
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ask every thread to finish its current iteration and exit.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::AcqRel) {
            log::info!("stop requested");
        }
    }

    /// Wait for every thread.  Without a prior [`stop`](Self::stop) this
    /// blocks until the driver has run all its steps.
    pub fn join(self) -> SimResult<RunSummary> {
        let driver = self
            .driver
            .join()
            .map_err(|_| SimError::Thread("driver thread panicked".into()))?;
        // Unit threads only exit once the flag is down.
        self.running.store(false, Ordering::Release);

        let mut summary = RunSummary::default();
        for (i, handle) in self.units.into_iter().enumerate() {
            let totals = handle
                .join()
                .map_err(|_| SimError::Thread(format!("elevator thread {i} panicked")))?;
            summary.elevator_ticks += totals.ticks;
            summary.boarded        += totals.boarded;
            summary.delivered      += totals.delivered;
        }

        let driver = driver?;
        summary.steps           = driver.steps;
        summary.arrived         = driver.arrived;
        summary.assignments     = driver.assignments;
        summary.boarded        += driver.boarded;
        summary.dispatch_passes = self.building.dispatch_passes();
        summary.final_waiting   = self.building.total_waiting();
        log::info!(
            "run joined after {} steps: {} delivered, {} still waiting",
            summary.steps,
            summary.delivered,
            summary.final_waiting,
        );
        Ok(summary)
    }
}

pub(crate) fn spawn<S>(config: SimConfig, building: Arc<Building>, source: S) -> SimResult<RunHandle>
where
    S: DemandSource + 'static,
{
    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = bounded(EVENT_BUFFER);
    log::info!(
        "spawning {} elevator threads ({} ms ticks) and a driver ({} ms steps)",
        building.elevators().len(),
        config.tick_interval_ms,
        config.step_interval_ms,
    );

    let mut units = Vec::with_capacity(building.elevators().len());
    for unit in building.elevators() {
        let id       = unit.id();
        let unit_running = Arc::clone(&running);
        let building = Arc::clone(&building);
        let tx       = tx.clone();
        let interval = Duration::from_millis(config.tick_interval_ms);
        let handle = thread::Builder::new()
            .name(format!("elevator-{}", id.0))
            .spawn(move || unit_loop(id, &building, &unit_running, &tx, interval));
        match handle {
            Ok(h) => units.push(h),
            Err(e) => {
                running.store(false, Ordering::Release);
                return Err(SimError::Thread(e.to_string()));
            }
        }
    }

    let driver = {
        let running  = Arc::clone(&running);
        let building = Arc::clone(&building);
        thread::Builder::new()
            .name("driver".into())
            .spawn(move || {
                let result = driver_loop(&config, &building, source, &running, &tx);
                running.store(false, Ordering::Release);
                if let Err(e) = &result {
                    log::error!("driver stopped: {e}");
                }
                result
            })
    };
    let driver = match driver {
        Ok(h) => h,
        Err(e) => {
            running.store(false, Ordering::Release);
            return Err(SimError::Thread(e.to_string()));
        }
    };

    Ok(RunHandle { running, building, events: rx, driver, units })
}

/// Send without blocking.  Returns `false` when the event was dropped.
pub(crate) fn emit(tx: &Sender<SimEvent>, event: SimEvent) -> bool {
    match tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            log::trace!("event buffer full, dropping event");
            false
        }
        Err(TrySendError::Disconnected(_)) => false,
    }
}

fn unit_loop(
    id:       ElevatorId,
    building: &Building,
    running:  &AtomicBool,
    tx:       &Sender<SimEvent>,
    interval: Duration,
) -> UnitTotals {
    let mut totals = UnitTotals::default();
    while running.load(Ordering::Acquire) {
        match building.tick(id) {
            Ok(outcome) => {
                totals.ticks     += 1;
                totals.boarded   += outcome.boarded as u64;
                totals.delivered += outcome.discharged as u64;
                if outcome.action != TickAction::Parked {
                    emit(tx, SimEvent::Ticked(outcome));
                }
            }
            Err(e) => {
                log::error!("{id}: {e}");
                break;
            }
        }
        thread::sleep(interval);
    }
    totals
}

fn driver_loop<S: DemandSource>(
    config:     &SimConfig,
    building:   &Building,
    mut source: S,
    running:    &AtomicBool,
    tx:         &Sender<SimEvent>,
) -> SimResult<DriverTotals> {
    let interval = Duration::from_millis(config.step_interval_ms);
    let mut totals = DriverTotals::default();
    let mut step = Tick::ZERO;

    while running.load(Ordering::Acquire) && step < config.end_tick() {
        let arrivals = source.arrivals(step);
        for arrival in &arrivals {
            building.inject_demand(arrival.floor, arrival.people)?;
            totals.arrived += arrival.people as u64;
        }
        let arrived = !arrivals.is_empty();
        if arrived {
            emit(tx, SimEvent::Arrivals { step, arrivals });
        }
        if should_dispatch(config.dispatch, arrived) {
            let report = building.dispatch_pass()?;
            totals.assignments += report.assignments.len() as u64;
            totals.boarded     += report.boarded_in_place() as u64;
            emit(tx, SimEvent::Dispatched { step, report });
        }

        step = step + 1;
        totals.steps = step.0;
        thread::sleep(interval);
    }

    emit(tx, SimEvent::Finished { steps: totals.steps });
    Ok(totals)
}
