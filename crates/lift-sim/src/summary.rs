//! Per-tick and per-run counters.

use lift_car::TickOutcome;
use lift_core::Tick;
use lift_dispatch::DispatchReport;

/// What happened during one driver step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:        Tick,
    /// Nominal time at the start of the step.
    pub elapsed_ms:  u64,
    /// People injected this step.
    pub arrived:     u32,
    /// People still waiting after every unit ticked.
    pub waiting:     u64,
    pub boarded:     u32,
    /// People discharged at the ground floor.
    pub delivered:   u32,
    pub assignments: usize,
    pub deferred:    usize,
}

impl TickSummary {
    /// Fold one unit's outcome into the counters.
    pub fn record_outcome(&mut self, outcome: &TickOutcome) {
        self.boarded   += outcome.boarded;
        self.delivered += outcome.discharged;
    }

    pub fn record_dispatch(&mut self, report: &DispatchReport) {
        self.assignments += report.assignments.len();
        self.boarded     += report.boarded_in_place();
        self.deferred    += report.deferred.len();
    }
}

/// Totals for a whole run, stepped or threaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Driver steps completed.
    pub steps:           u64,
    /// Elevator ticks across all units.
    pub elevator_ticks:  u64,
    pub arrived:         u64,
    pub boarded:         u64,
    pub delivered:       u64,
    pub assignments:     u64,
    pub dispatch_passes: u64,
    /// People still waiting when the run ended.
    pub final_waiting:   u64,
}

impl RunSummary {
    pub fn absorb(&mut self, tick: &TickSummary) {
        self.steps       += 1;
        self.arrived     += tick.arrived as u64;
        self.boarded     += tick.boarded as u64;
        self.delivered   += tick.delivered as u64;
        self.assignments += tick.assignments as u64;
    }
}
