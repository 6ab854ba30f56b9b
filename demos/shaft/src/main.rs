//! shaft — smallest runnable demo for the rust_lift framework.
//!
//! Simulates one elevator car working a scripted morning of hall calls in a
//! 20-floor shaft, printing the motion trace once per simulated second and
//! every audio cue as it fires.  Swap the call script and capability numbers
//! to feel how the trapezoidal profile reacts.

use std::io::Cursor;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_audio::{AudioSink, SoundEvent};
use lift_core::{Rect, Vec2};
use lift_motion::{CarCapabilities, FixedCapabilities, MotionTrace};
use lift_render::{ConveyanceView, DrawTarget, Sprite, TextureCatalog};
use lift_sim::{Car, CarObserver, CarSim};

// ── Constants ─────────────────────────────────────────────────────────────────

const NAMESPACE: &str = "tower/transport/elevator";
const DT_SECS: f64 = 1.0 / 60.0; // one frame at 60 fps
const RUN_SECS: f64 = 60.0;
const SEED: u64 = 42;

/// Standard passenger elevator: 4 floors/s² ramp, 6 floors/s cruise.
const CAR_ACCELERATION: f64 = 4.0;
const CAR_SPEED: f64 = 6.0;

// ── Hall-call script ──────────────────────────────────────────────────────────

// Each row commands a destination once the simulated clock passes `at_secs`.
// This is driver input, not dispatch logic — the car itself knows nothing
// about queues.
const CALLS_CSV: &str = "\
at_secs,floor\n\
0.0,14\n\
12.0,2\n\
22.0,3\n\
30.0,19\n\
45.0,0\n\
";

fn load_calls() -> Result<Vec<(f64, i32)>> {
    let mut reader = csv::Reader::from_reader(Cursor::new(CALLS_CSV));
    let mut calls = Vec::new();
    for record in reader.records() {
        let record = record.context("reading hall-call script")?;
        let at: f64 = record[0].parse().context("parsing at_secs")?;
        let floor: i32 = record[1].parse().context("parsing floor")?;
        calls.push((at, floor));
    }
    calls.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(calls)
}

// ── Application components ────────────────────────────────────────────────────

/// The shaft this car serves: fixed capability limits plus screen geometry.
struct Shaft {
    caps: FixedCapabilities,
}

impl CarCapabilities for Shaft {
    fn max_acceleration(&self) -> f64 {
        self.caps.max_acceleration()
    }
    fn max_speed(&self) -> f64 {
        self.caps.max_speed()
    }
}

impl ConveyanceView for Shaft {
    fn type_name(&self) -> &str {
        "standard"
    }
    fn world_rect(&self) -> Rect {
        Rect::new(128.0, 0.0, 44.0, 20.0 * 36.0)
    }
    fn cell_size(&self) -> Vec2 {
        Vec2::new(8.0, 36.0)
    }
}

/// Prints every cue instead of mixing it.
struct ConsoleAudio;

impl AudioSink for ConsoleAudio {
    fn play(&mut self, event: &SoundEvent) {
        let instance = event.instance();
        println!("  [audio] {} on {} layer", instance.key, instance.layer);
    }
}

/// Counts submissions and keeps the last sprite for the end-of-run summary.
#[derive(Default)]
struct FrameBufferStub {
    draws: u64,
    last: Option<Sprite>,
}

impl DrawTarget for FrameBufferStub {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.draws += 1;
        self.last = Some(sprite.clone());
    }
}

/// Prints one trace line per simulated second while the car is moving.
struct SecondTracer {
    frames_per_line: u64,
}

impl CarObserver for SecondTracer {
    fn on_advance(&mut self, frame: u64, trace: &MotionTrace) {
        if frame % self.frames_per_line == 0 {
            println!("t={:5.2}s  {}", frame as f64 * DT_SECS, trace);
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let calls = load_calls()?;
    let mut rng = SmallRng::seed_from_u64(SEED);

    let mut textures = TextureCatalog::new();
    textures.insert(format!("{NAMESPACE}/standard/car/empty"), 256.0, 64.0);
    textures.insert(format!("{NAMESPACE}/standard/car/occupied"), 256.0, 64.0);

    let shaft = Shaft {
        caps: FixedCapabilities::new(CAR_ACCELERATION, CAR_SPEED)
            .context("invalid car capability configuration")?,
    };

    let mut sim = CarSim::new(Car::new(NAMESPACE), shaft, ConsoleAudio, textures, DT_SECS)?;
    let mut tracer = SecondTracer {
        frames_per_line: (1.0 / DT_SECS).round() as u64,
    };
    let mut framebuffer = FrameBufferStub::default();
    let shaft_bounds = Rect::new(0.0, 0.0, 300.0, 20.0 * 36.0);

    let total_frames = (RUN_SECS / DT_SECS).round() as u64;
    let mut next_call = 0;

    println!(
        "shaft demo: {} hall calls over {RUN_SECS} s, a={CAR_ACCELERATION} floors/s², vmax={CAR_SPEED} floors/s",
        calls.len()
    );

    for _ in 0..total_frames {
        // Commands come from the script; occupancy is whoever boarded.
        while next_call < calls.len() && sim.elapsed_secs() >= calls[next_call].0 {
            let (_, floor) = calls[next_call];
            println!("t={:5.2}s  call: floor {floor}", sim.elapsed_secs());
            sim.car.set_destination_floor(floor);
            sim.car.set_occupancy(rng.gen_range(0..=4));
            next_call += 1;
        }

        sim.step(&mut tracer)?;
        sim.draw(&mut framebuffer, shaft_bounds);
    }

    println!(
        "done: floor {:.3} after {} frames, {} sprite submissions",
        sim.car.floor(),
        sim.frame(),
        framebuffer.draws
    );
    if let Some(sprite) = &framebuffer.last {
        println!("final sprite: {} at {}", sprite.texture, sprite.rect);
    }
    Ok(())
}
