use lift_core::{ElevatorId, LiftError};
use lift_demand::DemandError;
use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("demand error: {0}")]
    Demand(#[from] DemandError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("elevator {0} not found")]
    ElevatorNotFound(ElevatorId),

    #[error("{got} initial elevator states supplied for {expected} elevators")]
    ElevatorCountMismatch { expected: usize, got: usize },

    #[error("runner thread: {0}")]
    Thread(String),
}

pub type SimResult<T> = Result<T, SimError>;
