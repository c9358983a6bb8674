//! Building observer trait for progress reporting and instrumentation.

use lift_core::{CarId, FloorId};

/// Callbacks invoked by [`Building`][crate::Building] at key lifecycle points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console reporter
///
/// ```rust,ignore
/// struct Reporter;
///
/// impl BuildingObserver for Reporter {
///     fn on_call(&mut self, floor: FloorId, car: CarId, eta_secs: f64) {
///         println!("floor {floor} → {car}, eta {eta_secs:.1}s");
///     }
/// }
/// ```
pub trait BuildingObserver {
    /// A call was accepted and dispatched: `car` will serve `floor`, with the
    /// dispatcher's estimate attached.  Not invoked for no-op repeat calls.
    fn on_call(&mut self, _floor: FloorId, _car: CarId, _eta_secs: f64) {}

    /// `car` stopped at `floor` and the call was cleared.
    fn on_call_cleared(&mut self, _floor: FloorId, _car: CarId) {}

    /// An `advance_time` slice finished.  `elapsed_secs` is the building's
    /// total simulated time so far.
    fn on_advance_end(&mut self, _elapsed_secs: f64) {}
}

/// A [`BuildingObserver`] that does nothing.  Used by the plain
/// `handle_call`/`advance_time` entry points.
pub struct NoopObserver;

impl BuildingObserver for NoopObserver {}
