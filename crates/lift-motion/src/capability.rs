//! The `CarCapabilities` trait — read-only limits queried every tick.

use lift_core::{LiftError, LiftResult};

/// Kinematic limits of the conveyance a car belongs to.
///
/// The motion controller holds no reference to its owning conveyance;
/// the capability provider is passed into
/// [`advance`][crate::MotionController::advance] each tick, keeping
/// ownership and lifetime at the call site.
///
/// # Contract
///
/// Both values must be positive.  Zero or negative limits are a
/// configuration defect, not a runtime condition — the controller panics
/// on them rather than propagating an error nothing can recover from.
pub trait CarCapabilities {
    /// Maximum car acceleration, in floors/s².
    fn max_acceleration(&self) -> f64;

    /// Maximum car cruise speed, in floors/s.
    fn max_speed(&self) -> f64;
}

/// A capability provider with fixed limits, validated at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedCapabilities {
    acceleration: f64,
    speed: f64,
}

impl FixedCapabilities {
    /// Build a provider from `acceleration` (floors/s²) and `speed`
    /// (floors/s).  Rejects non-positive or non-finite values.
    pub fn new(acceleration: f64, speed: f64) -> LiftResult<Self> {
        if !(acceleration.is_finite() && acceleration > 0.0) {
            return Err(LiftError::Config(format!(
                "car acceleration must be a positive number, got {acceleration}"
            )));
        }
        if !(speed.is_finite() && speed > 0.0) {
            return Err(LiftError::Config(format!(
                "car speed must be a positive number, got {speed}"
            )));
        }
        Ok(Self { acceleration, speed })
    }
}

impl CarCapabilities for FixedCapabilities {
    #[inline]
    fn max_acceleration(&self) -> f64 {
        self.acceleration
    }

    #[inline]
    fn max_speed(&self) -> f64 {
        self.speed
    }
}
