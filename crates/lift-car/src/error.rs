use lift_core::{ElevatorId, Floor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarError {
    #[error("elevator {elevator} cannot accept {floor}: floors are 1..={top}")]
    FloorOutOfRange {
        elevator: ElevatorId,
        floor:    Floor,
        top:      Floor,
    },
}

pub type CarResult<T> = Result<T, CarError>;
