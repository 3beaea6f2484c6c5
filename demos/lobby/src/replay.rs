//! lobby_replay: deterministic stepped run with CSV output.
//!
//! Uses a scripted demand CSV when given one, seeded random arrivals
//! otherwise.  Output lands in `output/lobby/`.
//!
//! ```text
//! cargo run -p lobby --bin lobby_replay -- [config.json] [arrivals.csv]
//! ```

mod setup;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;

use lift_demand::{DemandSource, RandomArrivals, load_script_csv};
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::SimBuilder;

const OUTPUT_DIR: &str = "output/lobby";

fn main() -> Result<()> {
    setup::init_logging();
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let script_path = args.next().map(PathBuf::from);
    let config = setup::load_config(config_path.as_deref())?;

    println!("=== lobby_replay — rust_lift stepped run ===");
    setup::print_config(&config);

    let source: Box<dyn DemandSource> = match &script_path {
        Some(p) => {
            let script = load_script_csv(p, config.top_floor())?;
            println!("Loaded {} scripted arrivals over {} steps", script.len(), script.tick_count());
            Box::new(script)
        }
        None => Box::new(RandomArrivals::from_config(&config)),
    };

    let mut sim = SimBuilder::new(config, source).build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!("Simulation complete in {:.3} s", t0.elapsed().as_secs_f64());
    println!("  {OUTPUT_DIR}/elevator_snapshots.csv");
    println!("  {OUTPUT_DIR}/tick_summaries.csv");

    setup::print_summary(&sim.summary());

    println!();
    println!("{:<6} {:>6} {:>6} {:<12} {:>6}", "Car", "Floor", "Load", "State", "Stops");
    println!("{}", "-".repeat(40));
    for snap in sim.building.snapshot().elevators {
        println!(
            "{:<6} {:>6} {:>6} {:<12} {:>6}",
            snap.id.to_string(),
            snap.position.0,
            format!("{}/{}", snap.load, snap.capacity),
            snap.state.as_str(),
            snap.pending_stops(),
        );
    }
    Ok(())
}
