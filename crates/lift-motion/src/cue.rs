//! Arrival-cue port.
//!
//! The cue fires exactly once per stop-begin, at the instant a car enters
//! `Stopping`.  It is an injected side-effect port (audio, console, nothing):
//! the motion machine behaves identically whether or not a real cue is wired,
//! and implementations are expected to swallow and report their own failures
//! rather than surface them — `ding` has no way to affect simulation state.

use lift_core::{CarId, FloorId};

/// Side-effect hook invoked once per stop-begin event.
pub trait ArrivalCue {
    /// `car` has just arrived at `floor` and started its dwell.
    fn ding(&mut self, car: CarId, floor: FloorId);
}

/// An [`ArrivalCue`] that does nothing.  The default when no cue is wired.
pub struct NoopCue;

impl ArrivalCue for NoopCue {
    fn ding(&mut self, _car: CarId, _floor: FloorId) {}
}
