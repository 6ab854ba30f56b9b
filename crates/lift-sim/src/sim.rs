//! The `CarSim` frame driver.

use lift_audio::AudioSink;
use lift_core::Rect;
use lift_render::{DrawTarget, TextureSource};

use crate::{Car, CarObserver, Conveyance, SimError, SimResult};

/// Drives one [`Car`] at a fixed timestep.
///
/// `CarSim` owns the car and its three collaborators and enforces the
/// per-frame ordering contract: **advance, then update** — so the sprite a
/// frame draws always reflects that frame's floor.  Everything is
/// single-threaded and synchronous; one call to [`step`][Self::step] is one
/// simulation frame.
pub struct CarSim<C: Conveyance, A: AudioSink, T: TextureSource> {
    /// The simulated car.  Public so drivers can command destinations and
    /// occupancy between frames.
    pub car: Car,

    /// Capability and geometry provider, read-only.
    pub conveyance: C,

    /// Where one-shot cues get played.
    pub audio: A,

    /// Named texture metadata for the presentation adapter.
    pub textures: T,

    dt: f64,
    frame: u64,
}

impl<C: Conveyance, A: AudioSink, T: TextureSource> CarSim<C, A, T> {
    /// Build a driver stepping `dt` seconds per frame.
    pub fn new(car: Car, conveyance: C, audio: A, textures: T, dt: f64) -> SimResult<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::Config(format!(
                "frame timestep must be a positive number of seconds, got {dt}"
            )));
        }
        Ok(Self {
            car,
            conveyance,
            audio,
            textures,
            dt,
            frame: 0,
        })
    }

    /// Seconds of simulated time per frame.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Frames stepped so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds elapsed since the first frame.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.frame as f64 * self.dt
    }

    /// Run one frame: advance the journey, then resolve presentation.
    pub fn step<O: CarObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let frame = self.frame;
        observer.on_frame_start(frame);

        if let Some(trace) = self.car.advance(self.dt, &self.conveyance, &mut self.audio) {
            observer.on_advance(frame, &trace);
        }
        self.car.update(&self.conveyance, &self.textures)?;

        observer.on_frame_end(frame, self.car.floor());
        self.frame += 1;
        Ok(())
    }

    /// Run `frames` frames, then signal the observer that the run is over.
    pub fn run<O: CarObserver>(&mut self, frames: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..frames {
            self.step(observer)?;
        }
        observer.on_run_end(self.frame);
        Ok(())
    }

    /// Draw the car's current sprite.  Call after [`step`][Self::step]
    /// within a frame.
    pub fn draw(&self, target: &mut impl DrawTarget, dirty_region: Rect) {
        self.car.draw(target, dirty_region);
    }
}
