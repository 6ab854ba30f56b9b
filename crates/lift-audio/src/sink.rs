//! The `AudioSink` trait implemented by playback backends.

use crate::SoundEvent;

/// Fire-and-forget playback.
///
/// Implementations must not block: the simulation calls [`play`][Self::play]
/// from inside its tick and assumes it returns immediately.  There is no
/// result to report — a sink that cannot play (muted, missing resource)
/// simply drops the request.
pub trait AudioSink {
    /// Request playback of one event.
    ///
    /// For events with `copy_before_use` set, sinks that keep the descriptor
    /// beyond this call must store [`event.instance()`][SoundEvent::instance]
    /// rather than a shared reference.
    fn play(&mut self, event: &SoundEvent);
}

/// An [`AudioSink`] that discards everything.  Use for headless runs and
/// tests that don't assert on audio.
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _event: &SoundEvent) {}
}
