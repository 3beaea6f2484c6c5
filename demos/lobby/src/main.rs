//! lobby: live run of the rust_lift elevator simulator.
//!
//! One thread per elevator plus a driver thread that injects random
//! arrivals and dispatches.  Events print as they happen; the run ends
//! once the driver has made `total_ticks` steps.
//!
//! ```text
//! cargo run -p lobby -- [config.json]
//! ```

mod setup;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use lift_sim::{SimBuilder, SimEvent};

fn main() -> Result<()> {
    setup::init_logging();
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = setup::load_config(config_path.as_deref())?;

    println!("=== lobby — rust_lift live run ===");
    setup::print_config(&config);

    let sim = SimBuilder::random(config).build()?;
    let t0 = Instant::now();
    let handle = sim.spawn()?;

    // Ends at `Finished`, or once every runner thread has exited.
    for event in handle.events().iter() {
        match event {
            SimEvent::Arrivals { step, arrivals } => {
                for a in &arrivals {
                    println!("[{step}] {} waiting at floor {}", a.people, a.floor);
                }
            }
            SimEvent::Dispatched { step, report } => {
                for a in &report.assignments {
                    println!("[{step}] floor {} → {} (cost {})", a.floor, a.elevator, a.cost);
                }
                if !report.deferred.is_empty() {
                    println!("[{step}] deferred: {:?}", report.deferred);
                }
            }
            SimEvent::Ticked(outcome) => {
                if outcome.boarded > 0 || outcome.discharged > 0 {
                    println!(
                        "    {} at floor {}: +{} boarded, {} delivered",
                        outcome.elevator, outcome.to, outcome.boarded, outcome.discharged
                    );
                }
            }
            SimEvent::Finished { steps } => {
                log::info!("driver finished after {steps} steps");
                break;
            }
        }
    }

    handle.stop();
    let summary = handle.join()?;
    println!("Run complete in {:.3} s", t0.elapsed().as_secs_f64());
    setup::print_summary(&summary);
    Ok(())
}
