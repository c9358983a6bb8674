//! The `Building` — floors, cars, dispatch, and the advance-time loop.

use std::cell::Cell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use lift_core::{BuildingConfig, Cadence, CarId, FloorId};
use lift_dispatch::{estimate_arrival, select_car};
use lift_motion::{ArrivalCue, Car, CarSnapshot, ListenerId, MotionState, Subscription};

use crate::error::{SimError, SimResult};
use crate::floor::{Floor, FloorSnapshot};
use crate::observer::{BuildingObserver, NoopObserver};

// ── Active call bookkeeping ───────────────────────────────────────────────────

/// One armed call: which car was dispatched, and the completion flag its
/// one-shot watch sets when the car stops at the calling floor.
struct ActiveCall {
    car: CarId,
    completed: Rc<Cell<bool>>,
}

// ── Building ──────────────────────────────────────────────────────────────────

/// A building: the fixed set of floors and cars created at configuration
/// time, plus the dispatch and call-lifecycle state.
///
/// `Building` is the exclusive owner of dispatch decisions.  Floors and cars
/// are mutated only through building-mediated calls or by a car's own motion
/// machine inside [`advance_time`][Self::advance_time].
///
/// Create via [`BuildingBuilder`][crate::BuildingBuilder].
pub struct Building {
    id:      String,
    cadence: Cadence,
    floors:  Vec<Floor>,
    cars:    Vec<Car>,
    /// Armed calls keyed by floor.  The stored assignment is what lets the
    /// countdown be re-derived from the authoritative car state each slice;
    /// it is never exposed on `Floor`.
    calls: FxHashMap<FloorId, ActiveCall>,
    cue:   Box<dyn ArrivalCue>,
    elapsed_secs: f64,
}

impl Building {
    pub(crate) fn from_parts(
        config:  &BuildingConfig,
        cadence: Cadence,
        cue:     Box<dyn ArrivalCue>,
    ) -> Self {
        let floors = (0..config.number_of_floors).map(|n| Floor::new(FloorId(n))).collect();
        let cars = config
            .elevator_ids
            .iter()
            .enumerate()
            .map(|(i, name)| Car::new(CarId(i as u32), name.clone()))
            .collect();
        Self {
            id: config.id.clone(),
            cadence,
            floors,
            cars,
            calls: FxHashMap::default(),
            cue,
            elapsed_secs: 0.0,
        }
    }

    // ── Command surface ───────────────────────────────────────────────────

    /// Handle a call from `floor`.  See [`handle_call_observed`][Self::handle_call_observed].
    pub fn handle_call(&mut self, floor: FloorId) -> SimResult<()> {
        self.handle_call_observed(floor, &mut NoopObserver)
    }

    /// Handle a call from `floor`, reporting the dispatch to `observer`.
    ///
    /// A floor that is already calling is a silent no-op: nothing about the
    /// floor or any car changes, and the observer is not invoked.
    pub fn handle_call_observed<O: BuildingObserver>(
        &mut self,
        floor:    FloorId,
        observer: &mut O,
    ) -> SimResult<()> {
        let floor_count = self.floors.len() as u16;
        let Some(slot) = self.floors.get(floor.index()) else {
            return Err(SimError::FloorOutOfRange { floor, floor_count });
        };
        if slot.is_calling() {
            return Ok(());
        }

        let (winner, eta) = select_car(&self.cars, &self.cadence, floor);
        self.floors[floor.index()].arm(eta);

        let car = &mut self.cars[winner.index()];
        car.add_target(floor);
        car.start(&self.cadence);

        // One-shot completion watch: clear only when this car is Stopping at
        // this exact floor with the floor still at the queue head (or the
        // queue drained).  Passing the floor, or stopping elsewhere first,
        // keeps the watch armed.
        let completed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&completed);
        car.subscribe(move |snap: &CarSnapshot| {
            let stopped_here = snap.current_floor == floor
                && snap.motion_state == MotionState::Stopping
                && (snap.target_queue.first() == Some(&floor) || snap.target_queue.is_empty());
            if stopped_here {
                flag.set(true);
                Subscription::Cancel
            } else {
                Subscription::Keep
            }
        });

        self.calls.insert(floor, ActiveCall { car: winner, completed });
        observer.on_call(floor, winner, eta);
        Ok(())
    }

    /// Advance simulated time.  See [`advance_time_observed`][Self::advance_time_observed].
    pub fn advance_time(&mut self, delta_secs: f64) {
        self.advance_time_observed(delta_secs, &mut NoopObserver);
    }

    /// Advance simulated time by `delta_secs`, reporting cleared calls to
    /// `observer`.
    ///
    /// The slice is processed in fixed cadence increments: every increment
    /// steps each car's motion machine, then sweeps completed calls so a
    /// floor clears within the increment its car stopped in, regardless of
    /// how coarse the caller's slices are.  Afterwards each still-calling
    /// floor's countdown is re-derived from its assigned car.
    pub fn advance_time_observed<O: BuildingObserver>(
        &mut self,
        delta_secs: f64,
        observer:   &mut O,
    ) {
        if !(delta_secs > 0.0) {
            return;
        }

        let step = self.cadence.step_secs();
        let cadence = self.cadence;
        let mut left = delta_secs;
        while left > 0.0 {
            let dt = left.min(step);
            left -= dt;

            let cue = self.cue.as_mut();
            for car in &mut self.cars {
                car.step(dt, &cadence, cue);
            }
            self.sweep_completed(observer);
        }

        self.elapsed_secs += delta_secs;
        self.refresh_timers();
        observer.on_advance_end(self.elapsed_secs);
    }

    // ── Query surface ─────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    /// Total simulated seconds advanced so far.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Read-only access to the fleet, in `CarId` order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn floor(&self, floor: FloorId) -> Option<&Floor> {
        self.floors.get(floor.index())
    }

    pub fn floor_snapshots(&self) -> Vec<FloorSnapshot> {
        self.floors.iter().map(Floor::snapshot).collect()
    }

    pub fn car_snapshots(&self) -> Vec<CarSnapshot> {
        self.cars.iter().map(Car::snapshot).collect()
    }

    /// Subscribe to one car's state-change notifications.
    ///
    /// Returns `None` for an unknown car id.
    pub fn subscribe_car(
        &mut self,
        car: CarId,
        f:   impl FnMut(&CarSnapshot) -> Subscription + 'static,
    ) -> Option<ListenerId> {
        self.cars.get_mut(car.index()).map(|c| c.subscribe(f))
    }

    /// Remove a car listener.  Returns `false` if it was already removed or
    /// the car id is unknown.
    pub fn unsubscribe_car(&mut self, car: CarId, id: ListenerId) -> bool {
        self.cars
            .get_mut(car.index())
            .is_some_and(|c| c.unsubscribe(id))
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Clear every floor whose completion watch fired and drop its call.
    fn sweep_completed<O: BuildingObserver>(&mut self, observer: &mut O) {
        if self.calls.is_empty() {
            return;
        }
        let done: Vec<(FloorId, CarId)> = self
            .calls
            .iter()
            .filter(|(_, call)| call.completed.get())
            .map(|(&floor, call)| (floor, call.car))
            .collect();
        for (floor, car) in done {
            self.calls.remove(&floor);
            self.floors[floor.index()].clear();
            observer.on_call_cleared(floor, car);
        }
    }

    /// Re-derive each calling floor's countdown from its assigned car.
    fn refresh_timers(&mut self) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let floors  = &mut self.floors;
        let cars    = &self.cars;
        let cadence = &self.cadence;
        for (&floor, call) in &self.calls {
            let car = &cars[call.car.index()];
            floors[floor.index()].refresh(remaining_to(car, cadence, floor));
        }
    }
}

/// Seconds until `car` stops at `floor`, derived from its authoritative
/// state.
///
/// When `floor` is the committed leg's own target the answer is exactly the
/// leg's remaining time; the dispatch estimate is only consulted for floors
/// further along the path (where its planned-dwell accounting is correct).
fn remaining_to(car: &Car, cadence: &Cadence, floor: FloorId) -> f64 {
    match car.leg() {
        Some(leg) if leg.to_floor == floor => leg.remaining_secs(),
        _ => estimate_arrival(car, cadence, floor),
    }
}
