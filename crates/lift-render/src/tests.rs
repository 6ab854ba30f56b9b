//! Unit tests for lift-render.

use lift_core::{Rect, Vec2};

use crate::{CarSprite, DrawTarget, RenderError, Sprite, TextureCatalog, TextureSource};
use crate::adapter::ConveyanceView;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A fixed shaft: 40 px wide at x=100, 36 px cells.
struct TestShaft;

impl ConveyanceView for TestShaft {
    fn type_name(&self) -> &str {
        "standard"
    }

    fn world_rect(&self) -> Rect {
        Rect::new(100.0, 0.0, 40.0, 720.0)
    }

    fn cell_size(&self) -> Vec2 {
        Vec2::new(8.0, 36.0)
    }
}

/// Catalog with both car atlases registered as 256×64 px.
fn catalog() -> TextureCatalog {
    let mut c = TextureCatalog::new();
    c.insert("tower/transport/elevator/standard/car/empty", 256.0, 64.0);
    c.insert("tower/transport/elevator/standard/car/occupied", 256.0, 64.0);
    c
}

fn adapter() -> CarSprite {
    CarSprite::new("tower/transport/elevator")
}

/// Records every submitted sprite.
#[derive(Default)]
struct RecordingTarget {
    submitted: Vec<Sprite>,
}

impl DrawTarget for RecordingTarget {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.submitted.push(sprite.clone());
    }
}

// ── Texture selection ─────────────────────────────────────────────────────────

#[cfg(test)]
mod texture_selection {
    use super::*;

    #[test]
    fn key_composition() {
        let a = adapter();
        assert_eq!(
            a.texture_key("standard", 0),
            "tower/transport/elevator/standard/car/empty"
        );
        assert_eq!(
            a.texture_key("express", 3),
            "tower/transport/elevator/express/car/occupied"
        );
    }

    #[test]
    fn empty_car_uses_full_width() {
        let mut a = adapter();
        a.update(0.0, 0, &TestShaft, &catalog()).unwrap();
        let s = a.sprite();
        // Full width minus the 4/256 inset, shifted by 2/256.
        assert!((s.texture_rect.origin.x - 2.0 / 256.0).abs() < 1e-12);
        assert!((s.texture_rect.size.x - (1.0 - 4.0 / 256.0)).abs() < 1e-12);
    }

    #[test]
    fn occupied_car_selects_quarter_slice() {
        let mut a = adapter();
        a.update(0.0, 3, &TestShaft, &catalog()).unwrap();
        let s = a.sprite();
        assert_eq!(s.texture, "tower/transport/elevator/standard/car/occupied");
        // Slice 3 starts at 0.5; width is a quarter, both inset in pixels.
        assert!((s.texture_rect.origin.x - (0.5 + 2.0 / 256.0)).abs() < 1e-12);
        assert!((s.texture_rect.size.x - (0.25 - 4.0 / 256.0)).abs() < 1e-12);
    }

    #[test]
    fn vertical_inset_applied() {
        let mut a = adapter();
        a.update(0.0, 1, &TestShaft, &catalog()).unwrap();
        let s = a.sprite();
        assert!((s.texture_rect.origin.y - 1.0 / 64.0).abs() < 1e-12);
        assert!((s.texture_rect.size.y - (1.0 - 6.0 / 64.0)).abs() < 1e-12);
    }

    #[test]
    fn car_rect_sized_from_shaft() {
        let mut a = adapter();
        a.update(0.0, 0, &TestShaft, &catalog()).unwrap();
        let s = a.sprite();
        assert_eq!(s.rect.size.x, 36.0); // shaft width 40 − padding 4
        assert_eq!(s.rect.size.y, 30.0);
    }

    #[test]
    fn missing_texture_is_an_error() {
        let mut a = CarSprite::new("tower/transport/elevator");
        let empty = TextureCatalog::new();
        let err = a.update(0.0, 0, &TestShaft, &empty).unwrap_err();
        assert!(matches!(err, RenderError::TextureNotFound(_)));
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod position {
    use super::*;

    #[test]
    fn floor_maps_to_cell_height() {
        let mut a = adapter();
        a.update(5.0, 0, &TestShaft, &catalog()).unwrap();
        let s = a.sprite();
        assert_eq!(s.rect.origin.x, 102.0); // shaft x + 2 px inset
        assert_eq!(s.rect.origin.y, 5.0 * 36.0 + 1.0);
    }

    #[test]
    fn fractional_floor_positions_continuously() {
        let mut a = adapter();
        a.update(2.5, 0, &TestShaft, &catalog()).unwrap();
        assert_eq!(a.sprite().rect.origin.y, 2.5 * 36.0 + 1.0);
    }
}

// ── Change-driven refresh ─────────────────────────────────────────────────────

#[cfg(test)]
mod refresh_gating {
    use super::*;

    #[test]
    fn unmarked_update_recomputes_nothing() {
        let mut a = adapter();
        a.update(1.0, 0, &TestShaft, &catalog()).unwrap();
        // Inputs change but nothing was marked stale: sprite must not move.
        a.update(9.0, 3, &TestShaft, &catalog()).unwrap();
        assert_eq!(a.sprite().rect.origin.y, 1.0 * 36.0 + 1.0);
        assert_eq!(a.sprite().texture, "tower/transport/elevator/standard/car/empty");
    }

    #[test]
    fn marked_position_recomputes_position_only() {
        let mut a = adapter();
        a.update(1.0, 0, &TestShaft, &catalog()).unwrap();
        a.mark_position_stale();
        a.update(9.0, 3, &TestShaft, &catalog()).unwrap();
        assert_eq!(a.sprite().rect.origin.y, 9.0 * 36.0 + 1.0);
        // Texture was not marked, so occupancy 3 is not picked up.
        assert_eq!(a.sprite().texture, "tower/transport/elevator/standard/car/empty");
    }

    #[test]
    fn texture_staleness_survives_a_failed_lookup() {
        let mut a = adapter();
        let empty = TextureCatalog::new();
        // Lookup fails against an empty catalog; the sprite stays unset.
        assert!(a.update(0.0, 0, &TestShaft, &empty).is_err());
        // Once the atlases exist the next update must retry and succeed.
        a.update(0.0, 0, &TestShaft, &catalog()).unwrap();
        assert_eq!(a.sprite().texture, "tower/transport/elevator/standard/car/empty");
    }

    #[test]
    fn redundant_update_is_idempotent() {
        let mut a = adapter();
        a.update(4.0, 2, &TestShaft, &catalog()).unwrap();
        let before = a.sprite().clone();
        a.mark_position_stale();
        a.mark_texture_stale();
        a.update(4.0, 2, &TestShaft, &catalog()).unwrap();
        assert_eq!(a.sprite(), &before);
    }
}

// ── Drawing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod drawing {
    use super::*;

    #[test]
    fn draw_submits_current_sprite_unconditionally() {
        let mut a = adapter();
        a.update(3.0, 0, &TestShaft, &catalog()).unwrap();

        let mut target = RecordingTarget::default();
        let region = Rect::new(0.0, 0.0, 1.0, 1.0); // nowhere near the car
        a.draw(&mut target, region);
        a.draw(&mut target, region);

        assert_eq!(target.submitted.len(), 2);
        assert_eq!(&target.submitted[0], a.sprite());
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog_lookup {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let c = catalog();
        assert_eq!(c.len(), 2);
        let info = c
            .texture("tower/transport/elevator/standard/car/empty")
            .unwrap();
        assert_eq!(info.size, Vec2::new(256.0, 64.0));
    }

    #[test]
    fn unknown_key_errors() {
        let c = TextureCatalog::new();
        assert!(c.texture("nope").is_err());
        assert!(c.is_empty());
    }
}
