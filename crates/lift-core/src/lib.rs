//! `lift-core` — foundational types for the `rust_lift` elevator engine.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `serde` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `CarId`, `FloorId`                                  |
//! | [`time`]     | `Cadence` — travel/dwell durations and step rate    |
//! | [`config`]   | `BuildingConfig`, JSON loader                       |
//! | [`error`]    | `LiftError`, `LiftResult`                           |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, load_buildings_json, load_buildings_json_reader};
pub use error::{LiftError, LiftResult};
pub use ids::{CarId, FloorId};
pub use time::Cadence;
