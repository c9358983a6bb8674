//! Fluent builder for constructing a [`Building`].

use lift_core::{BuildingConfig, Cadence};
use lift_motion::{ArrivalCue, NoopCue};

use crate::{Building, SimResult};

/// Fluent builder for [`Building`].
///
/// # Required inputs
///
/// - [`BuildingConfig`] — floor count and the ordered elevator name list.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default              |
/// |---------------|----------------------|
/// | `.cadence(c)` | `Cadence::default()` |
/// | `.cue(c)`     | `NoopCue`            |
///
/// # Example
///
/// ```rust,ignore
/// let building = BuildingBuilder::new(config)
///     .cadence(Cadence::default())
///     .cue(Box::new(ConsoleCue))
///     .build()?;
/// ```
pub struct BuildingBuilder {
    config:  BuildingConfig,
    cadence: Cadence,
    cue:     Box<dyn ArrivalCue>,
}

impl BuildingBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self {
            config,
            cadence: Cadence::default(),
            cue: Box::new(NoopCue),
        }
    }

    /// Override the travel/dwell cadence.
    pub fn cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Wire an arrival cue.  The engine behaves identically without one.
    pub fn cue(mut self, cue: Box<dyn ArrivalCue>) -> Self {
        self.cue = cue;
        self
    }

    /// Validate the configuration and cadence, then construct the building
    /// with all floors and cars in place.
    pub fn build(self) -> SimResult<Building> {
        self.config.validate()?;
        self.cadence.validate()?;
        Ok(Building::from_parts(&self.config, self.cadence, self.cue))
    }
}
