//! CSV demand-script loader.
//!
//! # CSV format
//!
//! One row per arrival.  Rows need not be sorted.
//!
//! ```csv
//! tick,floor,people
//! 0,4,3
//! 2,7,1
//! 2,3,5
//! ```
//!
//! `floor` must be a hall floor (`2..=top`) and `people` must be positive.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, Tick};

use crate::{Arrival, DemandError, ScriptedArrivals};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRecord {
    tick:   u64,
    floor:  u32,
    people: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a demand script from a CSV file for a building whose top floor is
/// `top`.
pub fn load_script_csv(path: &Path, top: Floor) -> Result<ScriptedArrivals, DemandError> {
    let file = std::fs::File::open(path).map_err(DemandError::Io)?;
    load_script_reader(file, top)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
pub fn load_script_reader<R: Read>(reader: R, top: Floor) -> Result<ScriptedArrivals, DemandError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut script = ScriptedArrivals::new();

    for (row_no, result) in csv_reader.deserialize::<ArrivalRecord>().enumerate() {
        let row = result.map_err(|e| DemandError::Parse(e.to_string()))?;
        let floor = Floor(row.floor);
        if floor.0 < 2 || floor > top {
            return Err(DemandError::InvalidFloor { floor, top });
        }
        if row.people == 0 {
            return Err(DemandError::Parse(format!(
                "row {}: people must be positive",
                row_no + 1
            )));
        }
        script.push(Tick(row.tick), Arrival { floor, people: row.people });
    }

    Ok(script)
}
