//! `lift-motion` — the kinematic motion model for an elevator car.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`capability`] | `CarCapabilities` — read-only acceleration/speed provider   |
//! | [`profile`]    | `SpeedProfile` — trapezoidal accelerate/cruise/decelerate   |
//! | [`journey`]    | `Journey`, `CuePhase` — per-journey state + one-shot cues   |
//! | [`controller`] | `MotionController`, `MotionTrace` — the `advance(dt)` core  |
//!
//! # Motion model
//!
//! Position is recomputed every tick from total elapsed journey time rather
//! than integrated incrementally, so the result is framerate-independent and
//! immune to drift:
//!
//! 1. [`MotionController::set_destination_floor`] captures the start floor
//!    and resets the journey clock (idempotent for repeated identical
//!    destinations).
//! 2. Each [`MotionController::advance`] accumulates `dt`, plans a
//!    [`SpeedProfile`] from the capability provider's limits and the journey
//!    distance, and evaluates the closed-form position for the current
//!    elapsed time.
//! 3. Within 0.01 floors of the destination the position snaps exact and the
//!    journey is complete.
//!
//! Departure and arrival announcements are one-shot per journey, driven by
//! the [`CuePhase`][journey::CuePhase] state machine and played through a
//! caller-supplied [`AudioSink`][lift_audio::AudioSink].

pub mod capability;
pub mod controller;
pub mod journey;
pub mod profile;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capability::{CarCapabilities, FixedCapabilities};
pub use controller::{MotionController, MotionTrace};
pub use journey::{CuePhase, Journey};
pub use profile::{Phase, SpeedProfile};
