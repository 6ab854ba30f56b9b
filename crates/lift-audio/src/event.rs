//! Sound event descriptors.

// ── SoundKey ──────────────────────────────────────────────────────────────────

/// Name of a sound resource, e.g. `"tower/transport/elevator/arriving"`.
///
/// The key is resolved by whatever resource system backs the [`AudioSink`]
/// implementation; this crate treats it as opaque.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundKey(pub String);

impl SoundKey {
    #[inline]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SoundKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ── AudioLayer ────────────────────────────────────────────────────────────────

/// Mixing layer a sound plays on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AudioLayer {
    /// Ambient background layer.
    #[default]
    Background,
    /// Foreground cue layer — announcements, chimes.  Mixed on top of
    /// everything else.
    Foreground,
}

impl AudioLayer {
    pub fn as_str(self) -> &'static str {
        match self {
            AudioLayer::Background => "background",
            AudioLayer::Foreground => "foreground",
        }
    }
}

impl std::fmt::Display for AudioLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SoundEvent ────────────────────────────────────────────────────────────────

/// A pre-built description of one playback request.
///
/// Descriptors are constructed once (typically when the owning component is
/// built) and reused for every trigger.  When `copy_before_use` is set, each
/// trigger plays an independent instance, so overlapping triggers of the same
/// descriptor never share playback state — see [`instance`][Self::instance].
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundEvent {
    pub key: SoundKey,
    pub layer: AudioLayer,
    /// Clone the descriptor per playback so instances are independent.
    pub copy_before_use: bool,
}

impl SoundEvent {
    /// A foreground one-shot cue with copy-on-use semantics.
    pub fn foreground_cue(key: impl Into<String>) -> Self {
        Self {
            key: SoundKey::new(key),
            layer: AudioLayer::Foreground,
            copy_before_use: true,
        }
    }

    /// The descriptor to actually hand to the mixer for one playback.
    ///
    /// For `copy_before_use` events this is a fresh clone; otherwise the
    /// caller may keep using `self` directly.
    pub fn instance(&self) -> SoundEvent {
        self.clone()
    }
}
