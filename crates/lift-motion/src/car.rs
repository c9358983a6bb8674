//! The `Car` — one elevator's target queue and motion machine.

use lift_core::{Cadence, CarId, FloorId};

use crate::cue::ArrivalCue;
use crate::events::{ListenerId, ListenerRegistry, Subscription};
use crate::state::{Leg, MotionState};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Internal machine phase.  The data each state needs lives in the variant,
/// so `Moving` always has a committed leg and `Stopping` always has a
/// countdown — there is no separately tracked flag to fall out of sync.
enum Phase {
    Idle,
    Moving(Leg),
    Stopping { remaining_secs: f64 },
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// A single elevator: its position, its ordered target queue, and its
/// move→stop machine.
///
/// Invariants upheld by this type:
/// - the target queue never contains duplicates;
/// - `Idle` implies an empty queue;
/// - while `Moving`, `exact_position` monotonically approaches the queue head;
/// - every observable-state mutation notifies listeners synchronously before
///   the machine takes its next step.
///
/// Mutation happens only through [`add_target`][Self::add_target],
/// [`start`][Self::start], and the machine's own [`step`][Self::step].
pub struct Car {
    id:        CarId,
    name:      String,
    current_floor:  FloorId,
    exact_position: f64,
    target_queue:   Vec<FloorId>,
    phase:     Phase,
    listeners: ListenerRegistry,
}

/// Read-only copy of a car's observable state, delivered to listeners on
/// every change and available on demand via [`Car::snapshot`].
#[derive(Clone, Debug)]
pub struct CarSnapshot {
    pub id: CarId,
    pub name: String,
    pub current_floor: FloorId,
    pub exact_position: f64,
    pub target_queue: Vec<FloorId>,
    pub motion_state: MotionState,
    pub remaining_stop_secs: f64,
}

impl Car {
    /// Create an idle car at floor 0.
    pub fn new(id: CarId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            current_floor:  FloorId(0),
            exact_position: 0.0,
            target_queue:   Vec::new(),
            phase:     Phase::Idle,
            listeners: ListenerRegistry::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last integer floor reached (nearest floor while between floors).
    #[inline]
    pub fn current_floor(&self) -> FloorId {
        self.current_floor
    }

    /// Continuous position on the shaft axis, in floor units.
    #[inline]
    pub fn exact_position(&self) -> f64 {
        self.exact_position
    }

    /// The ordered, duplicate-free target queue.
    #[inline]
    pub fn targets(&self) -> &[FloorId] {
        &self.target_queue
    }

    pub fn motion_state(&self) -> MotionState {
        match self.phase {
            Phase::Idle          => MotionState::Idle,
            Phase::Moving(_)     => MotionState::Moving,
            Phase::Stopping { .. } => MotionState::Stopping,
        }
    }

    /// The committed travel leg, present exactly while `Moving`.
    pub fn leg(&self) -> Option<&Leg> {
        match &self.phase {
            Phase::Moving(leg) => Some(leg),
            _ => None,
        }
    }

    /// Seconds of dwell left, non-zero only while `Stopping`.
    pub fn remaining_stop_secs(&self) -> f64 {
        match self.phase {
            Phase::Stopping { remaining_secs } => remaining_secs,
            _ => 0.0,
        }
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            id: self.id,
            name: self.name.clone(),
            current_floor:  self.current_floor,
            exact_position: self.exact_position,
            target_queue:   self.target_queue.clone(),
            motion_state:   self.motion_state(),
            remaining_stop_secs: self.remaining_stop_secs(),
        }
    }

    // ── Listeners ─────────────────────────────────────────────────────────

    /// Subscribe to state-change notifications.  See [`ListenerRegistry`].
    pub fn subscribe(
        &mut self,
        f: impl FnMut(&CarSnapshot) -> Subscription + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(f)
    }

    /// Remove a listener.  Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.listeners.notify(&snapshot);
    }

    // ── Queue operations ──────────────────────────────────────────────────

    /// Append `floor` to the target queue if not already present and notify.
    /// Does not start motion.
    pub fn add_target(&mut self, floor: FloorId) {
        if self.target_queue.contains(&floor) {
            return;
        }
        self.target_queue.push(floor);
        self.notify();
    }

    /// Leave `Idle` and commit a leg to the queue head.
    ///
    /// Silent no-op while `Moving`/`Stopping` (the machine continues on its
    /// own) or when the queue is empty.
    pub fn start(&mut self, cadence: &Cadence) {
        if !matches!(self.phase, Phase::Idle) {
            return;
        }
        let Some(&next) = self.target_queue.first() else {
            return;
        };
        self.phase = Phase::Moving(Leg::commit(self.exact_position, next, cadence));
        self.notify();
    }

    // ── The machine ───────────────────────────────────────────────────────

    /// Advance the motion machine by `dt` seconds.
    ///
    /// Unused time carries across transitions, so a single large `dt` plays
    /// through arrivals, dwells, and follow-on legs exactly as a sequence of
    /// small steps would.  Listeners are notified at each position update,
    /// each countdown update, and each transition, in order.
    pub fn step(&mut self, dt: f64, cadence: &Cadence, cue: &mut dyn ArrivalCue) {
        if !(dt > 0.0) {
            return;
        }
        let mut budget = dt;
        while budget > 0.0 {
            budget = match self.motion_state() {
                MotionState::Idle     => return,
                MotionState::Moving   => self.step_moving(budget, cadence, cue),
                MotionState::Stopping => self.step_stopping(budget, cadence),
            };
        }
    }

    /// Spend `budget` travelling.  Returns the unspent remainder (non-zero
    /// only when the leg completed mid-step).
    fn step_moving(&mut self, budget: f64, cadence: &Cadence, cue: &mut dyn ArrivalCue) -> f64 {
        let Phase::Moving(leg) = &mut self.phase else {
            return 0.0;
        };

        let remaining = leg.remaining_secs();
        if budget < remaining {
            leg.elapsed_secs += budget;
            let position = leg.position();
            self.exact_position = position;
            // Update to the nearest integer floor as it is crossed.
            self.current_floor = FloorId(position.round() as u16);
            self.notify();
            return 0.0;
        }

        // Arrival: snap exactly onto the target floor, then begin the dwell.
        let target = leg.to_floor;
        self.exact_position = target.position();
        self.current_floor = target;
        self.phase = Phase::Stopping { remaining_secs: cadence.stop_duration_secs };
        self.notify();
        cue.ding(self.id, target);
        budget - remaining
    }

    /// Spend `budget` dwelling.  Returns the unspent remainder (non-zero only
    /// when the dwell completed mid-step).
    fn step_stopping(&mut self, budget: f64, cadence: &Cadence) -> f64 {
        let Phase::Stopping { remaining_secs } = &mut self.phase else {
            return 0.0;
        };

        if budget < *remaining_secs {
            *remaining_secs -= budget;
            self.notify();
            return 0.0;
        }
        let spent = *remaining_secs;
        // Final countdown update: still Stopping, queue head intact.  One-shot
        // completion watches rely on observing this state at least once even
        // when a single step spans the whole dwell tail.
        *remaining_secs = 0.0;
        self.notify();

        // Dwell over: retire the completed target, then next leg or Idle.
        if !self.target_queue.is_empty() {
            self.target_queue.remove(0);
        }
        self.phase = match self.target_queue.first() {
            Some(&next) => Phase::Moving(Leg::commit(self.exact_position, next, cadence)),
            None        => Phase::Idle,
        };
        self.notify();
        budget - spent
    }
}
