//! Configuration errors.
//!
//! Floor and elevator lookups fail in the crates that own them
//! (`DemandError`, `CarError`, `SimError`).  `LiftError` only covers a
//! `SimConfig` that cannot describe a building.

use thiserror::Error;

/// Raised by [`SimConfig::validate`](crate::SimConfig::validate).
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result of validating a configuration.
pub type LiftResult<T> = Result<T, LiftError>;
