//! The motion controller — journey state plus the per-tick `advance` core.

use lift_audio::{AudioSink, SoundEvent};

use crate::{CarCapabilities, Journey, Phase, SpeedProfile};

/// Distance (in floors) below which the car is considered at its
/// destination.  A plain equality comparison would never converge under
/// floating-point accumulation.
pub const ARRIVAL_EPSILON: f64 = 0.01;

/// Remaining distance (in floors) at which the arrival cue plays — a
/// pre-arrival chime, not the moment of the final snap.
pub const ARRIVAL_CUE_DISTANCE: f64 = 0.1;

/// Journeys shorter than this (in seconds) skip the departure cue.
pub const DEPARTURE_CUE_MIN_DURATION: f64 = 1.0;

// ── MotionTrace ───────────────────────────────────────────────────────────────

/// Snapshot of the controller's internals for one in-flight tick.
///
/// Returned from [`MotionController::advance`] as an observability hook;
/// drop it if you don't need tracing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionTrace {
    /// Journey distance `s`, floors.
    pub distance: f64,
    /// Cruise speed `v` planned for this journey, floors/s.
    pub speed: f64,
    /// Phase-alignment offset `t0`, seconds.
    pub t0: f64,
    /// Planned total journey duration `t1`, seconds.
    pub duration: f64,
    /// End of the acceleration phase, seconds.
    pub accel_end: f64,
    /// Start of the deceleration phase, seconds.
    pub decel_start: f64,
    /// Phase governing this tick.
    pub phase: Phase,
    /// Distance travelled from the start floor as of this tick.
    pub travelled: f64,
}

impl std::fmt::Display for MotionTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "s={:3.0}, v={:2.1}, t0={:2.1}, t1={:2.1}, tacc={:2.1}, tdec={:2.1}, {}",
            self.distance,
            self.speed,
            self.t0,
            self.duration,
            self.accel_end,
            self.decel_start,
            self.phase
        )
    }
}

// ── MotionController ──────────────────────────────────────────────────────────

/// Drives a car's continuous floor position toward a discrete destination.
///
/// The controller owns its [`Journey`] state and two pre-built one-shot
/// sound descriptors.  Collaborators — the capability provider and the
/// audio sink — are passed into [`advance`][Self::advance] per tick rather
/// than stored, so the controller holds no references into its surroundings.
///
/// Floor mutations funnel through [`set_floor`][Self::set_floor], which
/// records a change flag for the presentation layer
/// ([`take_floor_changed`][Self::take_floor_changed]).
#[derive(Clone, Debug)]
pub struct MotionController {
    floor: f64,
    journey: Journey,
    floor_changed: bool,
    arriving: SoundEvent,
    departing: SoundEvent,
}

impl MotionController {
    /// Create a controller at floor 0 with destination 0 (a completed
    /// zero-length journey).  `arriving_key`/`departing_key` name the sound
    /// resources for the two one-shot cues; both descriptors are built for
    /// the foreground layer with copy-on-use playback.
    pub fn new(arriving_key: impl Into<String>, departing_key: impl Into<String>) -> Self {
        Self {
            floor: 0.0,
            journey: Journey::to_floor(0, 0.0),
            floor_changed: false,
            arriving: SoundEvent::foreground_cue(arriving_key),
            departing: SoundEvent::foreground_cue(departing_key),
        }
    }

    /// Current continuous position, in floor units.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// The sole mutation path for the floor position.  No-op when `f`
    /// equals the current floor; otherwise updates it and flags the change
    /// for the presentation layer.
    pub fn set_floor(&mut self, f: f64) {
        if self.floor != f {
            self.floor = f;
            self.floor_changed = true;
        }
    }

    /// Target discrete floor of the current journey.
    #[inline]
    pub fn destination_floor(&self) -> i32 {
        self.journey.destination
    }

    /// Command a new destination.
    ///
    /// Idempotent: re-commanding the current destination leaves the journey
    /// untouched so an in-flight approach is never restarted.  A different
    /// destination replaces the journey — start floor captured at the
    /// current position, journey clock reset, both cues re-armed.  Motion
    /// itself only happens through [`advance`][Self::advance].
    pub fn set_destination_floor(&mut self, f: i32) {
        if f != self.journey.destination {
            self.journey = Journey::to_floor(f, self.floor);
        }
    }

    /// Read-only view of the journey state.
    #[inline]
    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    /// Clear and return the floor-changed flag.  The presentation layer
    /// consumes this once per frame to decide whether its screen position
    /// needs recomputing.
    pub fn take_floor_changed(&mut self) -> bool {
        std::mem::replace(&mut self.floor_changed, false)
    }

    /// Advance the journey by `dt` seconds of elapsed wall time.
    ///
    /// Recomputes the floor in closed form from total elapsed journey time
    /// (framerate-independent, no incremental integration), fires the
    /// one-shot departure/arrival cues at their physical moments, and snaps
    /// exactly onto the destination once within [`ARRIVAL_EPSILON`].
    ///
    /// Returns a [`MotionTrace`] while the journey is in flight, `None`
    /// once the car is at its destination.
    pub fn advance(
        &mut self,
        dt: f64,
        caps: &impl CarCapabilities,
        audio: &mut impl AudioSink,
    ) -> Option<MotionTrace> {
        let target = self.journey.destination as f64;

        // Journey complete: snap away the residual float error and stop.
        if (target - self.floor).abs() <= ARRIVAL_EPSILON {
            self.set_floor(target);
            return None;
        }

        self.journey.elapsed += dt;

        let a = caps.max_acceleration();
        let vmax = caps.max_speed();
        assert!(a > 0.0, "capability provider returned non-positive acceleration {a}");
        assert!(vmax > 0.0, "capability provider returned non-positive speed {vmax}");

        let profile = SpeedProfile::plan(a, vmax, self.journey.distance());
        let t = self.journey.elapsed;
        let phase = profile.phase_at(t);
        let travelled = profile.distance_at(t);

        if self.journey.ascending() {
            self.set_floor(self.journey.start_floor + travelled);
        } else {
            self.set_floor(self.journey.start_floor - travelled);
        }

        // Termination guard: past the planned duration the deceleration
        // formula curves back, so pin the car onto its destination no
        // matter what the numbers did.
        if t > profile.duration {
            self.set_floor(target);
        }

        // Departure cue — checked exactly once, on the journey's first tick.
        // Too-short journeys skip the sound but still consume the check.
        if self.journey.cues.announce_departure() && profile.duration >= DEPARTURE_CUE_MIN_DURATION {
            audio.play(&self.departing);
        }

        // Arrival cue — the first tick with less than a tenth of a floor
        // left to travel.
        if profile.distance - travelled < ARRIVAL_CUE_DISTANCE
            && self.journey.cues.announce_arrival()
        {
            audio.play(&self.arriving);
        }

        Some(MotionTrace {
            distance: profile.distance,
            speed: profile.speed,
            t0: profile.t0,
            duration: profile.duration,
            accel_end: profile.accel_end,
            decel_start: profile.decel_start,
            phase,
            travelled,
        })
    }
}
