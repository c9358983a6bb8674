//! Building configuration and JSON loader.
//!
//! # JSON format
//!
//! One object per building.  Field names are camelCase:
//!
//! ```json
//! [
//!   { "id": "Building 1", "numberOfFloors": 10, "elevatorIds": ["A", "B", "C"] },
//!   { "id": "Building 2", "numberOfFloors": 5,  "elevatorIds": ["D", "E"] }
//! ]
//! ```
//!
//! Every config is validated on load: a building must have at least one floor
//! and at least one elevator, and elevator names must be unique and non-empty.
//! The ≥1-elevator rule is what lets the dispatcher treat an empty car set as
//! a precondition violation rather than a runtime error.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{LiftError, LiftResult};

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Static configuration for one building: its floors and its elevator fleet.
///
/// Floors are numbered `0..number_of_floors`.  Elevator order is significant —
/// it fixes each car's `CarId` and thereby the dispatcher's tie-break order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingConfig {
    /// Unique building label, e.g. `"Building 1"`.
    pub id: String,

    /// Total floor count, ≥ 1.
    pub number_of_floors: u16,

    /// Ordered, unique elevator names, e.g. `["A", "B", "C"]`.  Must be
    /// non-empty.
    pub elevator_ids: Vec<String>,
}

impl BuildingConfig {
    /// Check structural validity: ≥1 floor, ≥1 elevator, unique non-empty names.
    pub fn validate(&self) -> LiftResult<()> {
        if self.number_of_floors == 0 {
            return Err(LiftError::Config(format!(
                "building {:?} must have at least one floor",
                self.id
            )));
        }
        if self.elevator_ids.is_empty() {
            return Err(LiftError::Config(format!(
                "building {:?} must have at least one elevator",
                self.id
            )));
        }
        let mut seen = HashSet::with_capacity(self.elevator_ids.len());
        for name in &self.elevator_ids {
            if name.is_empty() {
                return Err(LiftError::Config(format!(
                    "building {:?} has an empty elevator name",
                    self.id
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(LiftError::Config(format!(
                    "building {:?} has duplicate elevator name {:?}",
                    self.id, name
                )));
            }
        }
        Ok(())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a list of [`BuildingConfig`]s from a JSON file.
pub fn load_buildings_json(path: &Path) -> LiftResult<Vec<BuildingConfig>> {
    let file = std::fs::File::open(path).map_err(LiftError::Io)?;
    load_buildings_json_reader(file)
}

/// Like [`load_buildings_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded configuration
/// strings.
pub fn load_buildings_json_reader<R: Read>(reader: R) -> LiftResult<Vec<BuildingConfig>> {
    let configs: Vec<BuildingConfig> =
        serde_json::from_reader(reader).map_err(|e| LiftError::Parse(e.to_string()))?;
    for config in &configs {
        config.validate()?;
    }
    Ok(configs)
}
