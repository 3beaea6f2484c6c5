use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("nobody can wait at {floor} (hall floors are 2..={top})")]
    InvalidFloor { floor: Floor, top: Floor },

    #[error("demand script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DemandResult<T> = Result<T, DemandError>;
