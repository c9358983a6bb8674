//! `lift-dispatch` — which car answers a floor call, and how soon.
//!
//! The scoring pass is a pure function of current car state: it reads each
//! car's fields once, mutates nothing, and is deterministic.  That discipline
//! is what lets a building score its whole fleet mid-simulation without any
//! synchronization beyond a consistent read.
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`eta`]    | `estimate_arrival`, `round_eta`           |
//! | [`select`] | `select_car` — minimum-ETA selection      |

pub mod eta;
pub mod select;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use eta::{estimate_arrival, round_eta};
pub use select::select_car;
