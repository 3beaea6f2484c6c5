//! Shared setup for the lobby binaries.

use std::path::Path;

use anyhow::{Context, Result};

use lift_core::SimConfig;
use lift_sim::RunSummary;

/// Start `env_logger` at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Load a JSON config from `path`, or fall back to defaults.  Missing
/// fields take their default values.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", p.display()))?
        }
        None => SimConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

pub fn print_config(config: &SimConfig) {
    println!(
        "Building: {} floors | Elevators: {:?} | Steps: {} | Seed: {}",
        config.floor_count, config.capacities, config.total_ticks, config.seed
    );
    println!(
        "Timing: {} ms ticks, {} ms steps | Dispatch: {:?}",
        config.tick_interval_ms, config.step_interval_ms, config.dispatch
    );
    println!();
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{:<18} {:>10}", "Metric", "Value");
    println!("{}", "-".repeat(29));
    println!("{:<18} {:>10}", "steps", summary.steps);
    println!("{:<18} {:>10}", "elevator ticks", summary.elevator_ticks);
    println!("{:<18} {:>10}", "arrived", summary.arrived);
    println!("{:<18} {:>10}", "boarded", summary.boarded);
    println!("{:<18} {:>10}", "delivered", summary.delivered);
    println!("{:<18} {:>10}", "assignments", summary.assignments);
    println!("{:<18} {:>10}", "dispatch passes", summary.dispatch_passes);
    println!("{:<18} {:>10}", "still waiting", summary.final_waiting);
}
