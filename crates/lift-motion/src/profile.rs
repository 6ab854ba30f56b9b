//! Trapezoidal speed profile for one journey.
//!
//! Planned once per tick from `(a, vmax, s)` and evaluated in closed form —
//! the three phase formulas are constructed to be tangent (equal position
//! and velocity) at both phase boundaries, so position and velocity are
//! continuous over the whole journey.

/// Fraction of the journey distance nominally spent accelerating when the
/// cruise speed is distance-limited.  At 1/3 a short trip accelerates over
/// the first third, cruises the middle third, and brakes over the last
/// third.  1/2 would brake only at the midpoint (looks abrupt); small
/// values starve short trips of speed.
pub const ACCEL_DISTANCE_FRACTION: f64 = 1.0 / 3.0;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Which kinematic formula governs the car's position right now.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Uniform acceleration from rest.
    Accelerating,
    /// Constant velocity at the journey's cruise speed.
    Cruising,
    /// Uniform deceleration into the destination.
    Decelerating,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Accelerating => "accelerating",
            Phase::Cruising => "cruising",
            Phase::Decelerating => "decelerating",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SpeedProfile ──────────────────────────────────────────────────────────────

/// The timing constants of one accelerate/cruise/decelerate journey.
///
/// `t0` is the least obvious one: the time offset between the accelerated
/// car and a reference car cruising at `speed` from the start, chosen so
/// both are at the same position when acceleration ends.  It lets the
/// cruise-phase position be written as `speed * (t - t0)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedProfile {
    /// Journey distance `s`, in floors (always non-negative).
    pub distance: f64,
    /// Achievable cruise speed `v` for this distance, ≤ the capability limit.
    pub speed: f64,
    /// Acceleration `a` used for both ramp phases.
    pub acceleration: f64,
    /// Phase-alignment time offset for the cruise formula.
    pub t0: f64,
    /// Total journey duration `t1` — the car stops exactly at `distance`.
    pub duration: f64,
    /// Time at which acceleration ends and cruise begins.
    pub accel_end: f64,
    /// Time at which deceleration begins.
    pub decel_start: f64,
}

impl SpeedProfile {
    /// Plan a journey of `distance` floors under the limits `acceleration`
    /// (floors/s²) and `max_speed` (floors/s).
    ///
    /// The cruise speed is capped at `sqrt(2 q a s)` so short trips never
    /// reach the configured maximum — the speed ramp stays proportional to
    /// the distance.
    ///
    /// A zero distance yields a degenerate profile with `duration == 0`;
    /// evaluating it reports the car already at the destination.
    ///
    /// # Panics
    ///
    /// Panics if `acceleration` or `max_speed` is not positive — those come
    /// from the capability provider and are invalid by contract.
    pub fn plan(acceleration: f64, max_speed: f64, distance: f64) -> SpeedProfile {
        assert!(
            acceleration > 0.0,
            "car acceleration must be positive, got {acceleration}"
        );
        assert!(max_speed > 0.0, "car speed must be positive, got {max_speed}");

        let s = distance.abs();
        let v = max_speed.min((2.0 * ACCEL_DISTANCE_FRACTION * acceleration * s).sqrt());
        if v <= 0.0 {
            // Zero-length journey: nothing to travel, nothing to divide by.
            return SpeedProfile {
                distance: s,
                speed: 0.0,
                acceleration,
                t0: 0.0,
                duration: 0.0,
                accel_end: 0.0,
                decel_start: 0.0,
            };
        }

        let t0 = v / (2.0 * acceleration);
        let duration = s / v + 2.0 * t0;
        let accel_end = v / acceleration;
        let decel_start = duration - accel_end;

        SpeedProfile {
            distance: s,
            speed: v,
            acceleration,
            t0,
            duration,
            accel_end,
            decel_start,
        }
    }

    /// The phase governing position at elapsed time `t`.
    pub fn phase_at(&self, t: f64) -> Phase {
        if t > self.decel_start {
            Phase::Decelerating
        } else if t > self.accel_end {
            Phase::Cruising
        } else {
            Phase::Accelerating
        }
    }

    /// Distance travelled from the start at elapsed time `t`.
    ///
    /// Valid over `[0, duration]`; past `duration` the deceleration formula
    /// curves back and the caller's overrun clamp takes over.
    pub fn distance_at(&self, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.distance;
        }
        match self.phase_at(t) {
            Phase::Accelerating => 0.5 * self.acceleration * t * t,
            Phase::Cruising => self.speed * (t - self.t0),
            Phase::Decelerating => {
                let remaining = self.duration - t;
                self.distance - 0.5 * self.acceleration * remaining * remaining
            }
        }
    }

    /// Instantaneous speed at elapsed time `t`.
    pub fn velocity_at(&self, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        match self.phase_at(t) {
            Phase::Accelerating => self.acceleration * t,
            Phase::Cruising => self.speed,
            Phase::Decelerating => self.acceleration * (self.duration - t),
        }
    }
}
