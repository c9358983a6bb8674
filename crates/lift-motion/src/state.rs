//! Motion state and the committed travel leg.

use lift_core::{Cadence, FloorId};

/// The externally visible motion state of a car.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MotionState {
    /// No targets, not moving.  Implies an empty target queue.
    Idle,
    /// Travelling toward the head of the target queue.
    Moving,
    /// Dwelling at a floor with doors open.
    Stopping,
}

impl std::fmt::Display for MotionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MotionState::Idle     => "idle",
            MotionState::Moving   => "moving",
            MotionState::Stopping => "stopping",
        };
        f.write_str(s)
    }
}

/// One committed segment of travel: from a continuous start position to the
/// next queued floor.
///
/// A leg is committed when a car leaves `Idle` or finishes a dwell with more
/// targets queued, and it runs to completion — there is no cancellation.  The
/// leg is the authoritative in-flight timing source: the dispatcher reuses
/// [`Leg::remaining_secs`] instead of recomputing travel time from a position
/// snapshot, and the building derives the calling floor's countdown from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    /// Continuous position at departure.
    pub from_position: f64,
    /// The queued floor this leg ends at.
    pub to_floor: FloorId,
    /// Total travel time for the leg: `|Δfloors| × floor_duration_secs`.
    pub duration_secs: f64,
    /// Seconds of this leg already travelled, `0..=duration_secs`.
    pub elapsed_secs: f64,
}

impl Leg {
    /// Commit a leg from `from_position` to `to_floor`.
    pub fn commit(from_position: f64, to_floor: FloorId, cadence: &Cadence) -> Self {
        let distance = (to_floor.position() - from_position).abs();
        Self {
            from_position,
            to_floor,
            duration_secs: cadence.travel_secs(distance),
            elapsed_secs: 0.0,
        }
    }

    /// Exact in-flight seconds until this leg's arrival.
    #[inline]
    pub fn remaining_secs(&self) -> f64 {
        (self.duration_secs - self.elapsed_secs).max(0.0)
    }

    /// Continuous position at the current `elapsed_secs`, interpolated
    /// between the departure position and the target floor.
    pub fn position(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return self.to_floor.position();
        }
        let fraction = (self.elapsed_secs / self.duration_secs).min(1.0);
        self.from_position + (self.to_floor.position() - self.from_position) * fraction
    }
}
