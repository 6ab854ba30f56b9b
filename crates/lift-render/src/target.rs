//! The `DrawTarget` trait implemented by rendering backends.

use crate::Sprite;

/// Receives sprite submissions.
///
/// A target may rasterize immediately, batch into a command list, or (in
/// tests) simply record what was submitted.  Submission order is draw order.
pub trait DrawTarget {
    fn draw_sprite(&mut self, sprite: &Sprite);
}
