//! The full conveyance collaborator surface.

use lift_motion::CarCapabilities;
use lift_render::ConveyanceView;

/// Everything a car needs from the conveyance that owns it: kinematic
/// limits (motion side) and shaft geometry plus type naming (presentation
/// side).
///
/// The car never stores a conveyance reference — implementations are passed
/// into [`Car::advance`][crate::Car::advance] and
/// [`Car::update`][crate::Car::update], read-only, each frame.
pub trait Conveyance: CarCapabilities + ConveyanceView {}

impl<T: CarCapabilities + ConveyanceView> Conveyance for T {}
