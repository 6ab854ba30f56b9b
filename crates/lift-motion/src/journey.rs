//! Per-journey state: where it started, how long it has run, and which
//! one-shot announcements have fired.

// ── CuePhase ──────────────────────────────────────────────────────────────────

/// One-shot announcement state machine for a single journey.
///
/// A journey's audio cues each fire at most once.  Instead of two scattered
/// booleans, the progression is a single linear machine:
///
/// ```text
/// NotStarted → DepartureAnnounced → ArrivalAnnounced
/// ```
///
/// The departure check runs on the first advance tick of every journey, so
/// `DepartureAnnounced` is entered whether or not the sound actually played
/// (too-short journeys skip the sound but still consume the transition).
/// Assigning a new destination replaces the journey and with it the machine,
/// which is the only way back to `NotStarted`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CuePhase {
    #[default]
    NotStarted,
    DepartureAnnounced,
    ArrivalAnnounced,
}

impl CuePhase {
    /// Consume the departure transition.  `true` exactly once per journey,
    /// on the first call.
    pub fn announce_departure(&mut self) -> bool {
        if *self == CuePhase::NotStarted {
            *self = CuePhase::DepartureAnnounced;
            true
        } else {
            false
        }
    }

    /// Consume the arrival transition.  `true` exactly once per journey,
    /// and only after the departure check has run.
    pub fn announce_arrival(&mut self) -> bool {
        if *self == CuePhase::DepartureAnnounced {
            *self = CuePhase::ArrivalAnnounced;
            true
        } else {
            false
        }
    }
}

// ── Journey ───────────────────────────────────────────────────────────────────

/// The state of one commanded movement to a destination floor.
///
/// Created whenever a *different* destination is assigned and overwritten in
/// place by the next assignment; there is no journey lifecycle beyond that.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Journey {
    /// Target discrete floor.
    pub destination: i32,
    /// Continuous position at the moment the destination was assigned.
    pub start_floor: f64,
    /// Seconds since the destination was assigned.  Accumulated by
    /// `advance`; monotonically non-decreasing within a journey.
    pub elapsed: f64,
    /// One-shot announcement progression.
    pub cues: CuePhase,
}

impl Journey {
    /// Start a fresh journey from `start_floor` to `destination`.
    pub fn to_floor(destination: i32, start_floor: f64) -> Self {
        Self {
            destination,
            start_floor,
            elapsed: 0.0,
            cues: CuePhase::NotStarted,
        }
    }

    /// Journey distance `s = |destination − start|`, in floors.
    #[inline]
    pub fn distance(&self) -> f64 {
        (self.destination as f64 - self.start_floor).abs()
    }

    /// `true` if the car travels upward on this journey.
    #[inline]
    pub fn ascending(&self) -> bool {
        self.destination as f64 > self.start_floor
    }
}
