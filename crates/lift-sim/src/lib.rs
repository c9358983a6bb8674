//! `lift-sim` — the building aggregate and its call lifecycle.
//!
//! # Call lifecycle
//!
//! ```text
//! handle_call(f):
//!   ① no-op if floor f is already calling (one outstanding call per floor)
//!   ② score every car (lift-dispatch), keep the minimum ETA
//!   ③ arm the floor: timer = eta, is_calling = true
//!   ④ enqueue f on the winning car and start it
//!   ⑤ register a one-shot completion watch on the car
//!
//! advance_time(Δ):
//!   ① step every car's motion machine in fixed cadence increments
//!   ② sweep completion watches → clear floors whose car stopped there
//!   ③ refresh every calling floor's countdown from its assigned car's
//!      real state (single authoritative clock — no free-running decrement)
//! ```
//!
//! The completion watch clears a call only when the assigned car is
//! `Stopping` at that exact floor — a car merely passing through, or stopping
//! elsewhere first, leaves the call armed.
//!
//! | Module       | Contents                                    |
//! |--------------|---------------------------------------------|
//! | [`floor`]    | `Floor`, `FloorSnapshot`                    |
//! | [`building`] | `Building` — `handle_call`, `advance_time`  |
//! | [`builder`]  | `BuildingBuilder`                           |
//! | [`observer`] | `BuildingObserver`, `NoopObserver`          |
//! | [`error`]    | `SimError`, `SimResult`                     |

pub mod builder;
pub mod building;
pub mod error;
pub mod floor;
pub mod observer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::BuildingBuilder;
pub use building::Building;
pub use error::{SimError, SimResult};
pub use floor::{Floor, FloorSnapshot};
pub use observer::{BuildingObserver, NoopObserver};
