//! Simulation cadence: travel and dwell durations, and motion-step granularity.
//!
//! # Design
//!
//! Time is real-valued seconds.  Two constants govern everything the engine
//! computes: how long a car takes to travel one floor, and how long it dwells
//! (doors open) at each stop.  A third value, the update rate, fixes the
//! granularity at which `advance_time` drives each car's motion machine —
//! every position update and stop-countdown decrement is one scheduler step
//! of `step_secs()` seconds.
//!
//! Keeping all three in one struct means the dispatcher, the cars, and the
//! buildings can never disagree about the time model.

use crate::{LiftError, LiftResult};

/// Travel/dwell durations and the motion-step rate for one building.
///
/// `Cadence` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Cadence {
    /// Seconds for a car to travel the distance between adjacent floors.
    pub floor_duration_secs: f64,
    /// Seconds a car dwells at each stop before resuming.
    pub stop_duration_secs: f64,
    /// Motion-machine steps per simulated second.  Default: 30.
    pub updates_per_second: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            floor_duration_secs: 1.0,
            stop_duration_secs:  2.0,
            updates_per_second:  30,
        }
    }
}

impl Cadence {
    /// Duration of one motion-machine step, in seconds.
    #[inline]
    pub fn step_secs(&self) -> f64 {
        1.0 / f64::from(self.updates_per_second)
    }

    /// Travel time across `distance_floors` floors (may be fractional).
    #[inline]
    pub fn travel_secs(&self, distance_floors: f64) -> f64 {
        distance_floors.abs() * self.floor_duration_secs
    }

    /// Check that every field is positive and finite.
    pub fn validate(&self) -> LiftResult<()> {
        if !(self.floor_duration_secs.is_finite() && self.floor_duration_secs > 0.0) {
            return Err(LiftError::Config(format!(
                "floor_duration_secs must be positive and finite, got {}",
                self.floor_duration_secs
            )));
        }
        if !(self.stop_duration_secs.is_finite() && self.stop_duration_secs > 0.0) {
            return Err(LiftError::Config(format!(
                "stop_duration_secs must be positive and finite, got {}",
                self.stop_duration_secs
            )));
        }
        if self.updates_per_second == 0 {
            return Err(LiftError::Config(
                "updates_per_second must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
