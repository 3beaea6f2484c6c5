use lift_car::CarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch pass over a building with no elevators")]
    NoElevators,

    #[error(transparent)]
    Car(#[from] CarError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
