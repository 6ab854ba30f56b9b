//! `lift-audio` — one-shot sound descriptors and playback sink.
//!
//! The simulation never touches an audio device.  It builds [`SoundEvent`]
//! descriptors up front and hands them to an [`AudioSink`] at trigger time;
//! the sink (mixer, test recorder, or [`NullSink`]) decides what playback
//! means.  `play` is fire-and-forget by contract: it must not block the
//! simulation tick.

pub mod event;
pub mod sink;


pub use event::{AudioLayer, SoundEvent, SoundKey};
pub use sink::{AudioSink, NullSink};
