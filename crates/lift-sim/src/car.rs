//! The `Car` composite — one elevator cabin's motion, presentation, and
//! audio cues behind the public surface the simulation driver uses.

use lift_audio::AudioSink;
use lift_core::Rect;
use lift_motion::{MotionController, MotionTrace};
use lift_render::{CarSprite, DrawTarget, RenderResult, Sprite, TextureSource};

use crate::Conveyance;

/// One elevator car.
///
/// Owns the [`MotionController`] (journey state, one-shot sound
/// descriptors) and the [`CarSprite`] presentation adapter, and wires the
/// controller's floor-changed flag into the adapter's position refresh.
///
/// Within a frame, call [`advance`][Self::advance] before
/// [`update`][Self::update] before [`draw`][Self::draw].
pub struct Car {
    motion: MotionController,
    sprite: CarSprite,
    /// Externally supplied occupancy slice: 0 = empty, 1..=4 pick a slice
    /// of the occupied atlas.
    occupancy: u32,
}

impl Car {
    /// Build a car whose sound and texture resources live under
    /// `namespace` (e.g. `"tower/transport/elevator"`): the arrival and
    /// departure cues resolve as `"<namespace>/arriving"` /
    /// `"<namespace>/departing"`, car textures as
    /// `"<namespace>/<type>/car/<occupancy>"`.
    pub fn new(namespace: &str) -> Self {
        Self {
            motion: MotionController::new(
                format!("{namespace}/arriving"),
                format!("{namespace}/departing"),
            ),
            sprite: CarSprite::new(namespace),
            occupancy: 0,
        }
    }

    // ── Motion surface ────────────────────────────────────────────────────

    /// Current continuous position, in floor units.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.motion.floor()
    }

    /// Place the car directly at `f` (initial positioning; journeys move
    /// the car through `advance`).
    pub fn set_floor(&mut self, f: f64) {
        self.motion.set_floor(f);
    }

    #[inline]
    pub fn destination_floor(&self) -> i32 {
        self.motion.destination_floor()
    }

    /// Command a destination.  Idempotent for the current destination.
    pub fn set_destination_floor(&mut self, f: i32) {
        self.motion.set_destination_floor(f);
    }

    /// Advance the journey by `dt` seconds.  Returns the motion trace for
    /// an in-flight tick, `None` once at the destination.
    pub fn advance(
        &mut self,
        dt: f64,
        conveyance: &impl Conveyance,
        audio: &mut impl AudioSink,
    ) -> Option<MotionTrace> {
        self.motion.advance(dt, conveyance, audio)
    }

    // ── Presentation surface ──────────────────────────────────────────────

    #[inline]
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// Set the occupancy slice shown by the car texture.
    pub fn set_occupancy(&mut self, occupancy: u32) {
        if self.occupancy != occupancy {
            self.occupancy = occupancy;
            self.sprite.mark_texture_stale();
        }
    }

    /// Resolve stale presentation state.  Call after `advance` so the
    /// sprite reflects this frame's floor.
    pub fn update(
        &mut self,
        conveyance: &impl Conveyance,
        textures: &impl TextureSource,
    ) -> RenderResult<()> {
        if self.motion.take_floor_changed() {
            self.sprite.mark_position_stale();
        }
        self.sprite
            .update(self.motion.floor(), self.occupancy, conveyance, textures)
    }

    /// Submit the current sprite.  Performs no recomputation.
    pub fn draw(&self, target: &mut impl DrawTarget, dirty_region: Rect) {
        self.sprite.draw(target, dirty_region);
    }

    /// The sprite state as of the last `update`.
    #[inline]
    pub fn sprite(&self) -> &Sprite {
        self.sprite.sprite()
    }
}
