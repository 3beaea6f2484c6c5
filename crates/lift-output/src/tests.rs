//! Integration tests for lift-output.

use lift_core::ElevatorState;

use crate::row::{ElevatorSnapshotRow, TickSummaryRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snap_row(elevator_id: u32, tick: u64) -> ElevatorSnapshotRow {
    ElevatorSnapshotRow {
        elevator_id,
        tick,
        floor:         elevator_id + 2,
        load:          1,
        capacity:      5,
        state:         ElevatorState::Ascending,
        pending_stops: 2,
    }
}

fn summary_row(tick: u64) -> TickSummaryRow {
    TickSummaryRow {
        tick,
        elapsed_ms:  tick * 100,
        waiting:     4,
        boarded:     2,
        delivered:   1,
        assignments: 3,
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("elevator_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["elevator_id", "tick", "floor", "load", "capacity", "state", "pending_stops"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "elapsed_ms", "waiting", "boarded", "delivered", "assignments"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "0");         // elevator_id
        assert_eq!(&read_rows[0][1], "5");         // tick
        assert_eq!(&read_rows[1][2], "3");         // floor
        assert_eq!(&read_rows[1][5], "ascending"); // state
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");   // tick
        assert_eq!(&read_rows[0][1], "300"); // elapsed_ms
        assert_eq!(&read_rows[0][5], "3");   // assignments
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn missing_directory_is_a_csv_error() {
        let dir = tmp();
        let err = CsvWriter::new(&dir.path().join("nope")).err().expect("open must fail");
        assert!(matches!(err, crate::OutputError::Csv(_)));
        assert!(err.to_string().starts_with("writing elevator CSV output"));
    }

    #[test]
    fn integration_csv() {
        use lift_core::{Floor, SimConfig, Tick};
        use lift_demand::{Arrival, ScriptedArrivals};
        use lift_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            capacities:            vec![5, 5, 10],
            total_ticks:           6,
            output_interval_ticks: 2,
            ..SimConfig::default()
        };
        let script = ScriptedArrivals::new().with(Tick(0), Arrival { floor: Floor(3), people: 2 });
        let mut sim = SimBuilder::new(config, script).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at steps 0, 2, 4 (3 steps × 3 elevators)
        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 9 snapshot rows, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[0][5], "1", "one assignment at step 0");
    }
}

// ── Row conversion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use lift_car::ElevatorSnapshot;
    use lift_core::{ElevatorId, Floor, Tick};
    use lift_sim::TickSummary;

    use super::*;

    #[test]
    fn snapshot_row_counts_both_stop_sets() {
        let snap = ElevatorSnapshot {
            id:         ElevatorId(2),
            capacity:   10,
            position:   Floor(6),
            load:       4,
            state:      ElevatorState::Descending,
            up_stops:   vec![Floor(9)],
            down_stops: vec![Floor(4), Floor(2)],
        };
        let row = ElevatorSnapshotRow::new(Tick(11), &snap);
        assert_eq!(row.elevator_id, 2);
        assert_eq!(row.tick, 11);
        assert_eq!(row.floor, 6);
        assert_eq!(row.pending_stops, 3);
    }

    #[test]
    fn summary_row_from_tick_summary() {
        let s = TickSummary {
            tick:        Tick(4),
            elapsed_ms:  400,
            arrived:     3,
            waiting:     7,
            boarded:     2,
            delivered:   1,
            assignments: 2,
            deferred:    1,
        };
        let row = TickSummaryRow::from(&s);
        assert_eq!(row.tick, 4);
        assert_eq!(row.waiting, 7);
        assert_eq!(row.assignments, 2);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1), snap_row(2, 1)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM elevator_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_state_stored_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 0)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let state: String = conn
            .query_row("SELECT state FROM elevator_snapshots WHERE elevator_id = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(state, "ascending");
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(7)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, elapsed, waiting): (i64, i64, i64) = conn
            .query_row(
                "SELECT tick, elapsed_ms, waiting FROM tick_summaries WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(tick, 7);
        assert_eq!(elapsed, 700);
        assert_eq!(waiting, 4);
    }
}
