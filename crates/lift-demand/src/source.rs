//! Where new waiting people come from.
//!
//! The simulation driver asks its [`DemandSource`] once per step for the
//! arrivals of that step and injects them into the shared demand board.
//! Sources are plain state machines: deterministic given their seed or
//! script, no I/O, no blocking.

use lift_core::{Floor, SimConfig, SimRng, Tick};

/// A group of `people` who start waiting at `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    pub floor:  Floor,
    pub people: u32,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Produces the arrivals for each driver step.
///
/// `Send` because the threaded runner moves the source into its driver
/// thread.
pub trait DemandSource: Send {
    /// Arrivals for `tick`.  An empty `Vec` means nobody new this step.
    fn arrivals(&mut self, tick: Tick) -> Vec<Arrival>;

    /// `true` once the source will never produce another arrival.
    fn is_exhausted(&self) -> bool {
        false
    }
}

impl<S: DemandSource + ?Sized> DemandSource for Box<S> {
    fn arrivals(&mut self, tick: Tick) -> Vec<Arrival> {
        (**self).arrivals(tick)
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

// ── No-op ─────────────────────────────────────────────────────────────────────

/// A source that never produces arrivals.  Use it when a test injects demand
/// by hand.
pub struct NoArrivals;

impl DemandSource for NoArrivals {
    #[inline]
    fn arrivals(&mut self, _tick: Tick) -> Vec<Arrival> {
        vec![]
    }

    fn is_exhausted(&self) -> bool {
        true
    }
}

// ── Random ────────────────────────────────────────────────────────────────────

/// Bernoulli arrivals: each step, with probability `probability`, one group
/// of `min_people..=max_people` people appears on a uniformly chosen hall
/// floor.
pub struct RandomArrivals {
    rng:         SimRng,
    top:         Floor,
    probability: f64,
    min_people:  u32,
    max_people:  u32,
}

impl RandomArrivals {
    pub fn new(seed: u64, top: Floor, probability: f64, min_people: u32, max_people: u32) -> Self {
        Self {
            rng: SimRng::new(seed),
            top,
            probability,
            min_people: min_people.min(max_people),
            max_people,
        }
    }

    /// Build from the run configuration's seed and arrival parameters.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.seed,
            config.top_floor(),
            config.arrival_probability,
            config.min_people,
            config.max_people,
        )
    }
}

impl DemandSource for RandomArrivals {
    fn arrivals(&mut self, _tick: Tick) -> Vec<Arrival> {
        // A building without hall floors has nowhere to wait.
        if self.top.0 < 2 || !self.rng.gen_bool(self.probability) {
            return vec![];
        }
        let floor  = Floor(self.rng.gen_range(2..=self.top.0));
        let people = self.rng.gen_range(self.min_people..=self.max_people);
        vec![Arrival { floor, people }]
    }
}
