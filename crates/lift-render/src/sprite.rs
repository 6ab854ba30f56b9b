//! Sprite state — what to draw and where.

use lift_core::Rect;

/// One drawable quad: a named texture, the normalized sub-rectangle of it to
/// sample, and the world rectangle to fill.
///
/// The sprite holds no GPU state; [`DrawTarget`][crate::DrawTarget]
/// implementations resolve `texture` at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sprite {
    /// Key of the texture to sample, e.g. `"tower/transport/elevator/standard/car/occupied"`.
    pub texture: String,
    /// Sub-rectangle of the texture, in normalized `[0, 1]` coordinates.
    pub texture_rect: Rect,
    /// World-space rectangle the sprite covers.
    pub rect: Rect,
}

impl Sprite {
    pub fn new() -> Self {
        Self {
            texture: String::new(),
            texture_rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            rect: Rect::default(),
        }
    }
}
