//! The car presentation adapter.

use lift_core::{Rect, Refresh, Vec2};

use crate::{DrawTarget, RenderResult, Sprite, TextureSource};

/// Fixed on-screen height of a car, in pixels.
pub const CAR_HEIGHT_PX: f64 = 30.0;

/// Horizontal padding the car leaves inside its shaft, in pixels (2 px on
/// each side).
pub const CAR_SHAFT_PADDING_PX: f64 = 4.0;

/// Number of occupancy slices in the `occupied` atlas.
pub const OCCUPANCY_SLICES: u32 = 4;

/// Read-only presentation inputs supplied by the owning conveyance.
///
/// Mirrors the capability seam on the motion side: the adapter stores no
/// reference to the conveyance, it receives this view at update time.
pub trait ConveyanceView {
    /// Conveyance type name — keys into texture resource naming.
    fn type_name(&self) -> &str;

    /// World-space bounds of the whole conveyance (the shaft).
    fn world_rect(&self) -> Rect;

    /// World size of one structure cell; `cell_size().y` converts floor
    /// units to vertical pixels.
    fn cell_size(&self) -> Vec2;
}

// ── CarSprite ─────────────────────────────────────────────────────────────────

/// Change-driven sprite state for one car.
///
/// Two derived values, each behind a [`Refresh`] flag:
///
/// * **texture** — which atlas and which occupancy slice of it to sample;
///   stale when the occupancy changes.
/// * **position** — where in the world the sprite sits; stale when the
///   floor changes.
///
/// [`update`][Self::update] resolves whatever is stale; [`draw`][Self::draw]
/// submits the current sprite unconditionally.  Callers must update before
/// drawing within a frame so the sprite reflects the tick's new floor.
#[derive(Clone, Debug)]
pub struct CarSprite {
    sprite: Sprite,
    texture_refresh: Refresh,
    position_refresh: Refresh,
    /// Resource namespace prefix, e.g. `"tower/transport/elevator"`.
    namespace: String,
}

impl CarSprite {
    /// Both refresh flags start marked so the first update resolves a full
    /// sprite before anything is drawn.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            sprite: Sprite::new(),
            texture_refresh: Refresh::new(),
            position_refresh: Refresh::new(),
            namespace: namespace.into(),
        }
    }

    /// Mark the texture selection stale (occupancy changed).
    pub fn mark_texture_stale(&mut self) {
        self.texture_refresh.mark();
    }

    /// Mark the screen position stale (floor or shaft geometry changed).
    pub fn mark_position_stale(&mut self) {
        self.position_refresh.mark();
    }

    /// The current sprite state as of the last update.
    #[inline]
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Texture key for `occupancy` under this adapter's namespace and the
    /// conveyance's type name: `"<namespace>/<type>/car/<empty|occupied>"`.
    pub fn texture_key(&self, type_name: &str, occupancy: u32) -> String {
        let word = if occupancy == 0 { "empty" } else { "occupied" };
        format!("{}/{}/car/{}", self.namespace, type_name, word)
    }

    /// Resolve whatever is stale.  Idempotent and side-effect free beyond
    /// the sprite itself — safe to call redundantly, safe to skip when
    /// nothing was marked.
    pub fn update(
        &mut self,
        floor: f64,
        occupancy: u32,
        view: &impl ConveyanceView,
        textures: &impl TextureSource,
    ) -> RenderResult<()> {
        if self.texture_refresh.take() {
            // A failed lookup must not swallow the staleness: re-mark so
            // the next update retries once the texture exists.
            if let Err(e) = self.update_texture(occupancy, view, textures) {
                self.texture_refresh.mark();
                return Err(e);
            }
        }
        if self.position_refresh.take() {
            self.update_position(floor, view);
        }
        Ok(())
    }

    fn update_texture(
        &mut self,
        occupancy: u32,
        view: &impl ConveyanceView,
        textures: &impl TextureSource,
    ) -> RenderResult<()> {
        let key = self.texture_key(view.type_name(), occupancy);
        let info = textures.texture(&key)?;
        self.sprite.texture = key;

        // The `empty` image is a single frame; `occupied` is an atlas of
        // four equal-width occupancy slices.  Built from scratch every
        // recompute so redundant refreshes are idempotent.
        let slice = occupancy.min(OCCUPANCY_SLICES);
        let mut rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        if slice > 0 {
            rect.size.x = 0.25;
            rect.origin.x = (slice - 1) as f64 * 0.25;
        }

        // Inset the sampled rect so only the car is read, not the frame
        // pixels around it in the atlas.
        self.sprite.texture_rect =
            rect.inset(Vec2::new(2.0, 1.0) / info.size, Vec2::new(4.0, 6.0) / info.size);

        self.sprite.rect.size.x = view.world_rect().size.x - CAR_SHAFT_PADDING_PX;
        self.sprite.rect.size.y = CAR_HEIGHT_PX;
        Ok(())
    }

    fn update_position(&mut self, floor: f64, view: &impl ConveyanceView) {
        self.sprite.rect.origin.x = view.world_rect().origin.x;
        self.sprite.rect.origin.y = floor * view.cell_size().y;
        self.sprite.rect.origin += Vec2::new(2.0, 1.0);
    }

    /// Submit the current sprite.  No recomputation happens here; the
    /// region is accepted for interface symmetry with other drawables and
    /// the car draws regardless.
    pub fn draw(&self, target: &mut impl DrawTarget, _dirty_region: Rect) {
        target.draw_sprite(&self.sprite);
    }
}
