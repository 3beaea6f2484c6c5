//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use lift_car::CarState;
use lift_core::SimConfig;
use lift_demand::{DemandSource, RandomArrivals};

use crate::{Building, RunSummary, Sim, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: floors, capacities, total steps, seed, intervals, …
/// - `S: DemandSource`: where waiting people come from
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                               |
/// |-----------------------|---------------------------------------|
/// | `.initial_states(v)`  | Every elevator idle at the ground     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ScriptedArrivals::new())
///     .initial_states(states)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: DemandSource> {
    config: SimConfig,
    source: S,
    states: Option<Vec<CarState>>,
}

impl<S: DemandSource> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, source: S) -> Self {
        Self { config, source, states: None }
    }

    /// Start each elevator from the given state (must be one per entry of
    /// `config.capacities`).
    pub fn initial_states(mut self, states: Vec<CarState>) -> Self {
        self.states = Some(states);
        self
    }

    /// Validate the configuration, build the building, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        let building = match self.states {
            Some(states) => Building::with_states(&self.config, states)?,
            None         => Building::from_config(&self.config)?,
        };
        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            building: Arc::new(building),
            source:   self.source,
            totals:   RunSummary::default(),
        })
    }
}

impl SimBuilder<RandomArrivals> {
    /// Builder whose demand comes from `config`'s seeded random generator.
    pub fn random(config: SimConfig) -> Self {
        let source = RandomArrivals::from_config(&config);
        Self::new(config, source)
    }
}
