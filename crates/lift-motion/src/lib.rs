//! `lift-motion` — the car motion state machine for the `rust_lift` engine.
//!
//! # State machine
//!
//! ```text
//! Idle ──start()──▶ Moving ──arrival──▶ Stopping ──dwell over──▶ Moving (queue non-empty)
//!                                                            └─▶ Idle   (queue empty)
//! ```
//!
//! A car is driven exclusively by [`Car::step`] — an explicit,
//! scheduler-stepped machine rather than a self-timing loop.  The building's
//! `advance_time` calls `step` in fixed increments; each increment updates the
//! car's continuous position (or its stop countdown) and notifies listeners
//! synchronously before the machine proceeds.  One leg runs to completion
//! before the next begins; a new target can only be appended, never preempt.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`state`]  | `MotionState`, `Leg`                                  |
//! | [`car`]    | `Car`, `CarSnapshot`                                  |
//! | [`events`] | `ListenerRegistry`, `ListenerId`, `Subscription`      |
//! | [`cue`]    | `ArrivalCue`, `NoopCue`                               |

pub mod car;
pub mod cue;
pub mod events;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{Car, CarSnapshot};
pub use cue::{ArrivalCue, NoopCue};
pub use events::{ListenerId, ListenerRegistry, Subscription};
pub use state::{Leg, MotionState};
