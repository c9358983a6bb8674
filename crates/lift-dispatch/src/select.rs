//! Minimum-ETA car selection.

use lift_core::{Cadence, CarId, FloorId};
use lift_motion::Car;

use crate::eta::estimate_arrival;

/// Pick the car with the smallest [`estimate_arrival`] for `floor`.
///
/// Ties keep the first car encountered, so selection is stable in `CarId`
/// (configuration) order.  Scoring mutates nothing.
///
/// # Panics
///
/// Panics if `cars` is empty.  A building always has at least one car by
/// construction (`BuildingConfig::validate`), so an empty fleet here is a
/// caller precondition violation, not a runtime condition.
pub fn select_car(cars: &[Car], cadence: &Cadence, floor: FloorId) -> (CarId, f64) {
    assert!(!cars.is_empty(), "select_car requires at least one car");

    let mut best = cars[0].id();
    let mut best_eta = estimate_arrival(&cars[0], cadence, floor);
    for car in &cars[1..] {
        let eta = estimate_arrival(car, cadence, floor);
        if eta < best_eta {
            best = car.id();
            best_eta = eta;
        }
    }
    (best, best_eta)
}
