//! Failures while persisting elevator snapshots and step summaries.
//!
//! Opening the output files and writing rows fail as `Csv` or `Sqlite`;
//! flushing the CSV files at the end of a run fails as `Io`.  None of these
//! stop a simulation: `SimOutputObserver` keeps the first one for
//! `take_error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("flushing output files: {0}")]
    Io(#[from] std::io::Error),

    #[error("writing elevator CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("writing output.db: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
