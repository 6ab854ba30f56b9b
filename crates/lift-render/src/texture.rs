//! Named texture lookup.

use lift_core::Vec2;
use rustc_hash::FxHashMap;

use crate::{RenderError, RenderResult};

/// Metadata for one loaded texture.
///
/// The presentation math only needs the pixel size (to convert pixel insets
/// into normalized coordinates); actual pixel data stays inside whatever
/// backs the [`TextureSource`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureInfo {
    /// Texture dimensions in pixels.
    pub size: Vec2,
}

/// Resolves texture names to their metadata.
///
/// Lookup is caller-visible fallible: a missing texture is a real error the
/// presentation layer propagates, unlike the motion layer which has no
/// recoverable failures.
pub trait TextureSource {
    fn texture(&self, key: &str) -> RenderResult<TextureInfo>;
}

/// An in-memory [`TextureSource`] keyed by name.
///
/// Applications register every atlas once at startup; lookups during the
/// frame loop are then a single hash-map probe.
#[derive(Clone, Debug, Default)]
pub struct TextureCatalog {
    entries: FxHashMap<String, TextureInfo>,
}

impl TextureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a texture of `width × height` pixels.
    pub fn insert(&mut self, key: impl Into<String>, width: f64, height: f64) {
        self.entries.insert(
            key.into(),
            TextureInfo {
                size: Vec2::new(width, height),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextureSource for TextureCatalog {
    fn texture(&self, key: &str) -> RenderResult<TextureInfo> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| RenderError::TextureNotFound(key.to_string()))
    }
}
