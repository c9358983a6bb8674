//! Arrival-time estimation.
//!
//! # Algorithm
//!
//! `estimate_arrival` walks the car's projected path — its current target
//! queue, with the requested floor appended if absent — accumulating travel
//! time (`|Δfloors| × floor_duration_secs`) per leg and one dwell per
//! intermediate stop.  Accumulation ends at the leg whose destination is the
//! requested floor.
//!
//! Before the walk, the car's present activity is folded in:
//!
//! - **Stopping** — the remaining dwell is added and the walk starts from the
//!   rounded position (the car is snapped onto a floor while stopping).
//! - **Moving** — the committed leg's exact remaining time is added, plus one
//!   dwell for the planned stop at its target, and the walk starts past that
//!   leg.  The leg is authoritative in-flight timing; recomputing the first
//!   hop from a position snapshot would drift from the car's real progress.
//! - **Idle** — the walk starts directly from the car's position.
//!
//! # Rounding policy
//!
//! The result is rounded to one decimal place, half away from zero
//! ([`round_eta`]).  This is the single canonical policy; no other rounding
//! feeds dispatch decisions or floor timers.

use lift_core::{Cadence, FloorId};
use lift_motion::{Car, MotionState};

/// Round an ETA to one decimal place, half away from zero.
#[inline]
pub fn round_eta(secs: f64) -> f64 {
    (secs * 10.0).round() / 10.0
}

/// Estimated seconds until `car` would stop at `floor`, given its current
/// queue and in-flight state.  Pure: no side effects, deterministic.
///
/// A floor already present in the queue is never double-counted — neither
/// its travel nor its dwell.
pub fn estimate_arrival(car: &Car, cadence: &Cadence, floor: FloorId) -> f64 {
    let mut time = 0.0;
    let mut position = car.exact_position();

    // Projected path: current queue plus the requested floor if absent.
    let mut path: Vec<FloorId> = car.targets().to_vec();
    if !path.contains(&floor) {
        path.push(floor);
    }
    let mut next_leg = 0;

    match car.motion_state() {
        MotionState::Stopping => {
            time += car.remaining_stop_secs();
            position = car.exact_position().round();
        }
        MotionState::Moving => {
            if let Some(leg) = car.leg() {
                // The queue head is the leg target; consume it as one unit of
                // exact in-flight time plus the planned dwell there.
                time += leg.remaining_secs() + cadence.stop_duration_secs;
                position = leg.to_floor.position();
                next_leg = 1;
            }
        }
        MotionState::Idle => {}
    }

    for &stop in &path[next_leg..] {
        let stop_position = stop.position();
        if position == stop_position {
            // Redundant zero-length hop.
            if stop == floor {
                break;
            }
            continue;
        }
        time += cadence.travel_secs(stop_position - position);
        position = stop_position;
        if stop == floor {
            break;
        }
        time += cadence.stop_duration_secs;
    }

    round_eta(time)
}
