//! Integration tests for lift-sim.

use std::cell::RefCell;
use std::rc::Rc;

use lift_core::{BuildingConfig, Cadence, CarId, FloorId};
use lift_dispatch::estimate_arrival;
use lift_motion::{ArrivalCue, MotionState, Subscription};

use crate::{Building, BuildingBuilder, BuildingObserver, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(floors: u16, elevators: &[&str]) -> BuildingConfig {
    BuildingConfig {
        id:               "test".into(),
        number_of_floors: floors,
        elevator_ids:     elevators.iter().map(|s| s.to_string()).collect(),
    }
}

fn cadence() -> Cadence {
    Cadence {
        floor_duration_secs: 1.0,
        stop_duration_secs:  2.0,
        updates_per_second:  30,
    }
}

fn building(floors: u16, elevators: &[&str]) -> Building {
    BuildingBuilder::new(config(floors, elevators))
        .cadence(cadence())
        .build()
        .unwrap()
}

/// Advance in small slices until no floor is calling and every car is idle
/// (or the limit trips, failing the test).
fn run_to_quiescence(b: &mut Building) {
    for _ in 0..10_000 {
        let busy = b.floor_snapshots().iter().any(|f| f.is_calling)
            || b.cars().iter().any(|c| c.motion_state() != MotionState::Idle);
        if !busy {
            return;
        }
        b.advance_time(0.1);
    }
    panic!("building never went quiet");
}

/// Observer recording dispatches and cleared calls.
#[derive(Default)]
struct Recorder {
    calls:   Vec<(FloorId, CarId, f64)>,
    cleared: Vec<(FloorId, CarId)>,
}

impl BuildingObserver for Recorder {
    fn on_call(&mut self, floor: FloorId, car: CarId, eta_secs: f64) {
        self.calls.push((floor, car, eta_secs));
    }
    fn on_call_cleared(&mut self, floor: FloorId, car: CarId) {
        self.cleared.push((floor, car));
    }
}

/// Cue writing into shared state so tests can inspect it after the building
/// takes ownership.
struct SharedCue(Rc<RefCell<Vec<(CarId, FloorId)>>>);

impl ArrivalCue for SharedCue {
    fn ding(&mut self, car: CarId, floor: FloorId) {
        self.0.borrow_mut().push((car, floor));
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn builds_floors_and_cars_from_config() {
        let b = building(10, &["A", "B", "C"]);
        assert_eq!(b.floor_snapshots().len(), 10);
        assert_eq!(b.cars().len(), 3);
        assert_eq!(b.cars()[0].name(), "A");
        assert_eq!(b.cars()[2].id(), CarId(2));
        // Everything starts idle at floor 0 with no calls armed.
        assert!(b.floor_snapshots().iter().all(|f| !f.is_calling && f.timer_secs == 0.0));
        assert!(b.cars().iter().all(|c| c.motion_state() == MotionState::Idle));
    }

    #[test]
    fn invalid_config_rejected() {
        let result = BuildingBuilder::new(config(0, &["A"])).build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_cadence_rejected() {
        let bad = Cadence { floor_duration_secs: 0.0, ..cadence() };
        let result = BuildingBuilder::new(config(5, &["A"])).cadence(bad).build();
        assert!(result.is_err());
    }
}

// ── handle_call ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod calls {
    use super::*;

    #[test]
    fn call_arms_floor_with_dispatch_eta() {
        let mut b = building(10, &["A"]);
        let mut rec = Recorder::default();
        b.handle_call_observed(FloorId(5), &mut rec).unwrap();

        let floor = b.floor(FloorId(5)).unwrap();
        assert!(floor.is_calling());
        assert_eq!(floor.timer_secs(), 5.0); // 5 floors × 1 s, no dwell
        assert_eq!(rec.calls, vec![(FloorId(5), CarId(0), 5.0)]);
        assert_eq!(b.cars()[0].targets(), &[FloorId(5)]);
        assert_eq!(b.cars()[0].motion_state(), MotionState::Moving);
    }

    #[test]
    fn out_of_range_floor_is_an_error() {
        let mut b = building(10, &["A"]);
        let result = b.handle_call(FloorId(99));
        assert!(matches!(
            result,
            Err(SimError::FloorOutOfRange { floor: FloorId(99), floor_count: 10 })
        ));
    }

    #[test]
    fn repeat_call_is_a_silent_noop() {
        // The second call changes nothing and re-arms nothing.
        let mut b = building(10, &["A"]);
        let mut rec = Recorder::default();
        b.handle_call_observed(FloorId(5), &mut rec).unwrap();
        b.advance_time(1.0);

        let floor_before = b.floor(FloorId(5)).unwrap().snapshot();
        let car_before = b.cars()[0].snapshot();
        b.handle_call_observed(FloorId(5), &mut rec).unwrap();

        assert_eq!(b.floor(FloorId(5)).unwrap().snapshot(), floor_before);
        assert_eq!(b.cars()[0].targets(), car_before.target_queue);
        assert_eq!(rec.calls.len(), 1);
    }

    #[test]
    fn two_idle_cars_nearest_wins() {
        // Stage car A at floor 10 first, then call 9.
        let mut b = building(11, &["A", "B"]);
        b.handle_call(FloorId(10)).unwrap();
        run_to_quiescence(&mut b);
        assert_eq!(b.cars()[0].current_floor(), FloorId(10));

        let mut rec = Recorder::default();
        b.handle_call_observed(FloorId(9), &mut rec).unwrap();
        assert_eq!(rec.calls, vec![(FloorId(9), CarId(0), 1.0)]); // 1 floor beats 9
    }

    #[test]
    fn selected_eta_is_minimal_over_fleet() {
        let mut b = building(12, &["A", "B", "C"]);
        b.handle_call(FloorId(4)).unwrap();
        b.advance_time(1.5);

        let floor = FloorId(11);
        let mut rec = Recorder::default();
        b.handle_call_observed(floor, &mut rec).unwrap();
        let (_, _, eta) = rec.calls[0];
        for car in b.cars() {
            assert!(eta <= estimate_arrival(car, b.cadence(), floor));
        }
    }
}

// ── Call lifecycle ────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn call_clears_exactly_when_car_stops_there() {
        let mut b = building(10, &["A"]);
        let mut rec = Recorder::default();
        b.handle_call_observed(FloorId(5), &mut rec).unwrap();

        // While the car hasn't yet stopped at 5, the call stays armed.
        for _ in 0..200 {
            if !b.floor(FloorId(5)).unwrap().is_calling() {
                break;
            }
            b.advance_time_observed(0.05, &mut rec);
            if b.floor(FloorId(5)).unwrap().is_calling() {
                let car = &b.cars()[0];
                assert!(
                    !(car.motion_state() == MotionState::Stopping
                        && car.current_floor() == FloorId(5)),
                    "call still armed while car dwells at the floor"
                );
            }
        }
        assert!(!b.floor(FloorId(5)).unwrap().is_calling());
        assert_eq!(b.floor(FloorId(5)).unwrap().timer_secs(), 0.0);
        assert_eq!(rec.cleared, vec![(FloorId(5), CarId(0))]);
        // The car is dwelling at the floor the instant the call clears.
        assert_eq!(b.cars()[0].motion_state(), MotionState::Stopping);
        assert_eq!(b.cars()[0].current_floor(), FloorId(5));
    }

    #[test]
    fn passing_a_calling_floor_does_not_clear_it() {
        // One car, calls for 5 then 2: the car passes floor 2 on its way up
        // and must leave that call armed until it actually stops there.
        let mut b = building(10, &["A"]);
        b.handle_call(FloorId(5)).unwrap();
        b.handle_call(FloorId(2)).unwrap();
        assert_eq!(b.cars()[0].targets(), &[FloorId(5), FloorId(2)]);

        // Run until the first stop completes its dwell.
        for _ in 0..200 {
            if !b.floor(FloorId(5)).unwrap().is_calling() {
                break;
            }
            b.advance_time(0.1);
        }
        assert!(!b.floor(FloorId(5)).unwrap().is_calling());
        // Floor 2 was crossed en route but must still be calling.
        assert!(b.floor(FloorId(2)).unwrap().is_calling());

        run_to_quiescence(&mut b);
        assert!(!b.floor(FloorId(2)).unwrap().is_calling());
        assert_eq!(b.cars()[0].current_floor(), FloorId(2));
    }

    #[test]
    fn coarse_advance_still_clears_calls() {
        // A single huge slice must not skip the completion predicate.
        let mut b = building(10, &["A"]);
        let mut rec = Recorder::default();
        b.handle_call_observed(FloorId(7), &mut rec).unwrap();
        b.advance_time_observed(500.0, &mut rec);

        assert!(!b.floor(FloorId(7)).unwrap().is_calling());
        assert_eq!(rec.cleared, vec![(FloorId(7), CarId(0))]);
        assert_eq!(b.cars()[0].motion_state(), MotionState::Idle);
        assert_eq!(b.cars()[0].current_floor(), FloorId(7));
    }

    #[test]
    fn timer_tracks_real_progress_and_never_increases() {
        let mut b = building(10, &["A"]);
        b.handle_call(FloorId(5)).unwrap();
        assert_eq!(b.floor(FloorId(5)).unwrap().timer_secs(), 5.0);

        let mut last = f64::INFINITY;
        for _ in 0..100 {
            if !b.floor(FloorId(5)).unwrap().is_calling() {
                break;
            }
            b.advance_time(0.25);
            let timer = b.floor(FloorId(5)).unwrap().timer_secs();
            assert!(timer <= last, "timer increased: {timer} > {last}");
            assert!(timer >= 0.0);
            last = timer;
        }
        assert!(!b.floor(FloorId(5)).unwrap().is_calling());

        // After 1 s of a 5 s leg the derived countdown sits near 4 s.
        let mut b = building(10, &["A"]);
        b.handle_call(FloorId(5)).unwrap();
        b.advance_time(1.0);
        let timer = b.floor(FloorId(5)).unwrap().timer_secs();
        assert!((timer - 4.0).abs() < 0.05, "got {timer}");
    }

    #[test]
    fn cue_fires_once_per_stop() {
        let dings = Rc::new(RefCell::new(Vec::new()));
        let mut b = BuildingBuilder::new(config(10, &["A"]))
            .cadence(cadence())
            .cue(Box::new(SharedCue(Rc::clone(&dings))))
            .build()
            .unwrap();

        b.handle_call(FloorId(3)).unwrap();
        b.handle_call(FloorId(6)).unwrap();
        run_to_quiescence(&mut b);

        assert_eq!(*dings.borrow(), vec![(CarId(0), FloorId(3)), (CarId(0), FloorId(6))]);
    }

    #[test]
    fn advance_time_rejects_nonpositive_slices() {
        let mut b = building(10, &["A"]);
        b.handle_call(FloorId(5)).unwrap();
        let before = b.cars()[0].snapshot();
        b.advance_time(0.0);
        b.advance_time(-3.0);
        assert_eq!(b.elapsed_secs(), 0.0);
        assert_eq!(b.cars()[0].snapshot().exact_position, before.exact_position);
    }

    #[test]
    fn concurrent_calls_on_two_cars() {
        // With both cars idle at 0, two calls should fan out: the first car
        // takes floor 6, leaving the second car strictly better for floor 2.
        let mut b = building(10, &["A", "B"]);
        let mut rec = Recorder::default();
        b.handle_call_observed(FloorId(6), &mut rec).unwrap();
        b.handle_call_observed(FloorId(2), &mut rec).unwrap();
        assert_eq!(rec.calls[0].1, CarId(0));
        assert_eq!(rec.calls[1].1, CarId(1));

        run_to_quiescence(&mut b);
        assert_eq!(b.cars()[0].current_floor(), FloorId(6));
        assert_eq!(b.cars()[1].current_floor(), FloorId(2));
    }

    #[test]
    fn external_subscription_sees_the_whole_ride() {
        let mut b = building(10, &["A"]);
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&states);
        let id = b
            .subscribe_car(CarId(0), move |snap| {
                sink.borrow_mut().push(snap.motion_state);
                Subscription::Keep
            })
            .unwrap();

        b.handle_call(FloorId(2)).unwrap();
        run_to_quiescence(&mut b);
        assert!(b.unsubscribe_car(CarId(0), id));

        let states = states.borrow();
        assert!(states.contains(&MotionState::Moving));
        assert!(states.contains(&MotionState::Stopping));
        assert_eq!(*states.last().unwrap(), MotionState::Idle);
    }
}
