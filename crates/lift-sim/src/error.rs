use lift_core::{FloorId, LiftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("building configuration error: {0}")]
    Config(String),

    #[error("floor {floor} out of range (building has {floor_count} floors)")]
    FloorOutOfRange { floor: FloorId, floor_count: u16 },

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
