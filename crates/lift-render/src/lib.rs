//! `lift-render` — presentation layer for an elevator car.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`sprite`]  | `Sprite` — texture key + sub-rect + world rect              |
//! | [`texture`] | `TextureSource` trait, `TextureCatalog`, `TextureInfo`      |
//! | [`target`]  | `DrawTarget` trait — where sprites get submitted            |
//! | [`adapter`] | `CarSprite` — change-driven texture/position refresh + draw |
//! | [`error`]   | `RenderError`, `RenderResult<T>`                            |
//!
//! # Change-driven refresh
//!
//! The adapter's two derived values — which atlas slice to show and where on
//! screen the car sits — are each guarded by a [`Refresh`][lift_core::Refresh]
//! flag.  Producers mark the flag when an input changes (occupancy, floor,
//! world rect); [`CarSprite::update`] resolves whatever is stale and nothing
//! else.  [`CarSprite::draw`] submits the current sprite unconditionally and
//! never recomputes.

pub mod adapter;
pub mod error;
pub mod sprite;
pub mod target;
pub mod texture;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use adapter::{CarSprite, ConveyanceView};
pub use error::{RenderError, RenderResult};
pub use sprite::Sprite;
pub use target::DrawTarget;
pub use texture::{TextureCatalog, TextureInfo, TextureSource};
