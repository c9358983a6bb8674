//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `LiftError` via `From` impls, or keep them separate and wrap `LiftError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::FloorId;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("floor {floor} out of range (building has {floor_count} floors)")]
    FloorOutOfRange { floor: FloorId, floor_count: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
