//! Unit tests for lift-sim.

use lift_audio::{AudioSink, SoundEvent};
use lift_core::{Rect, Vec2};
use lift_motion::{CarCapabilities, MotionTrace};
use lift_render::{ConveyanceView, DrawTarget, Sprite, TextureCatalog};

use crate::{Car, CarObserver, CarSim, CsvTraceWriter, NoopObserver, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

const NAMESPACE: &str = "tower/transport/elevator";

/// A standard shaft: a = 2 floors/s², vmax = 2 floors/s, 40 px wide at
/// x = 100, 36 px cells.
struct StandardShaft;

impl CarCapabilities for StandardShaft {
    fn max_acceleration(&self) -> f64 {
        2.0
    }
    fn max_speed(&self) -> f64 {
        2.0
    }
}

impl ConveyanceView for StandardShaft {
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

#[derive(Default)]
struct RecordingAudio {
    played: Vec<String>,
}

impl RecordingAudio {
    fn count(&self, suffix: &str) -> usize {
        self.played.iter().filter(|k| k.ends_with(suffix)).count()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, event: &SoundEvent) {
        self.played.push(event.instance().key.as_str().to_string());
    }
}

#[derive(Default)]
struct RecordingTarget {
    submitted: Vec<Sprite>,
}

impl DrawTarget for RecordingTarget {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.submitted.push(sprite.clone());
    }
}

fn catalog() -> TextureCatalog {
    let mut c = TextureCatalog::new();
    c.insert(format!("{NAMESPACE}/standard/car/empty"), 256.0, 64.0);
    c.insert(format!("{NAMESPACE}/standard/car/occupied"), 256.0, 64.0);
    c
}

fn sim() -> CarSim<StandardShaft, RecordingAudio, TextureCatalog> {
    CarSim::new(
        Car::new(NAMESPACE),
        StandardShaft,
        RecordingAudio::default(),
        catalog(),
        0.05,
    )
    .unwrap()
}

// ── Car ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car {
    use super::*;

    #[test]
    fn sound_keys_composed_from_namespace() {
        let mut car = Car::new(NAMESPACE);
        let mut audio = RecordingAudio::default();
        car.set_destination_floor(10);
        car.advance(0.05, &StandardShaft, &mut audio);
        assert_eq!(audio.played, vec![format!("{NAMESPACE}/departing")]);
    }

    #[test]
    fn update_reflects_the_advanced_floor() {
        let mut car = Car::new(NAMESPACE);
        let mut audio = RecordingAudio::default();
        let textures = catalog();
        car.set_destination_floor(10);

        // One second of travel: d = 0.5 · 2 · 1² = 1 floor.
        for _ in 0..20 {
            car.advance(0.05, &StandardShaft, &mut audio);
        }
        car.update(&StandardShaft, &textures).unwrap();

        let expected_y = car.floor() * 36.0 + 1.0;
        assert!((car.sprite().rect.origin.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn occupancy_change_switches_the_texture() {
        let mut car = Car::new(NAMESPACE);
        let textures = catalog();
        car.update(&StandardShaft, &textures).unwrap();
        assert!(car.sprite().texture.ends_with("car/empty"));

        car.set_occupancy(2);
        car.update(&StandardShaft, &textures).unwrap();
        assert!(car.sprite().texture.ends_with("car/occupied"));
        assert_eq!(car.occupancy(), 2);
    }

    #[test]
    fn stationary_car_update_is_stable() {
        let mut car = Car::new(NAMESPACE);
        let textures = catalog();
        car.update(&StandardShaft, &textures).unwrap();
        let before = car.sprite().clone();
        // No motion, no occupancy change: repeated updates are no-ops.
        car.update(&StandardShaft, &textures).unwrap();
        assert_eq!(car.sprite(), &before);
    }

    #[test]
    fn missing_texture_surfaces_from_update() {
        let mut car = Car::new(NAMESPACE);
        let empty = TextureCatalog::new();
        assert!(car.update(&StandardShaft, &empty).is_err());
    }
}

// ── CarSim ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car_sim {
    use super::*;

    #[test]
    fn rejects_non_positive_timestep() {
        let r = CarSim::new(
            Car::new(NAMESPACE),
            StandardShaft,
            RecordingAudio::default(),
            catalog(),
            0.0,
        );
        assert!(matches!(r, Err(SimError::Config(_))));
    }

    #[test]
    fn full_journey_end_to_end() {
        let mut sim = sim();
        sim.car.set_destination_floor(10);
        sim.run(140, &mut NoopObserver).unwrap(); // 7 s at dt = 0.05, t1 = 6 s

        assert_eq!(sim.car.floor(), 10.0);
        assert_eq!(sim.audio.count("/departing"), 1);
        assert_eq!(sim.audio.count("/arriving"), 1);
        assert_eq!(sim.frame(), 140);

        // Presentation landed with the car.
        let mut target = RecordingTarget::default();
        sim.draw(&mut target, Rect::new(0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(target.submitted[0].rect.origin.y, 10.0 * 36.0 + 1.0);
    }

    #[test]
    fn frame_end_floor_matches_the_same_frames_advance() {
        /// Fails the ordering guarantee if update/draw ever see a stale
        /// floor.
        struct OrderingCheck {
            floors: Vec<f64>,
        }

        impl CarObserver for OrderingCheck {
            fn on_frame_end(&mut self, _frame: u64, floor: f64) {
                self.floors.push(floor);
            }
        }

        let mut sim = sim();
        sim.car.set_destination_floor(4);
        let mut check = OrderingCheck { floors: Vec::new() };
        for _ in 0..40 {
            let before = sim.car.floor();
            sim.step(&mut check).unwrap();
            let reported = *check.floors.last().unwrap();
            assert_eq!(reported, sim.car.floor());
            assert!(reported >= before); // ascending journey
        }
    }

    #[test]
    fn elapsed_time_tracks_frames() {
        let mut sim = sim();
        sim.run(40, &mut NoopObserver).unwrap();
        assert!((sim.elapsed_secs() - 2.0).abs() < 1e-12);
    }
}

// ── CSV trace ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_trace {
    use super::*;

    #[test]
    fn one_row_per_in_flight_tick() {
        let mut sim = sim();
        sim.car.set_destination_floor(1); // short trip, parks early

        let writer = csv::Writer::from_writer(Vec::new());
        let mut trace = CsvTraceWriter::from_writer(writer).unwrap();
        sim.run(100, &mut trace).unwrap();
        assert!(trace.take_error().is_none());

        let bytes = trace.into_writer().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "frame,floor,distance,speed,t0,duration,accel_end,decel_start,phase,travelled"
        );
        let rows: Vec<&str> = lines.collect();
        // In-flight ticks only: far fewer than the 100 frames stepped.
        assert!(!rows.is_empty());
        assert!(rows.len() < 100, "terminal frames must not produce rows");
        assert!(rows[0].starts_with("0,"));
        assert!(rows[0].contains("accelerating"));
    }

    #[test]
    fn parked_car_produces_no_rows() {
        let mut sim = sim();
        let writer = csv::Writer::from_writer(Vec::new());
        let mut trace = CsvTraceWriter::from_writer(writer).unwrap();
        sim.run(10, &mut trace).unwrap();

        let text = String::from_utf8(trace.into_writer().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1); // header only
    }

    #[test]
    fn trace_display_is_one_compact_line() {
        let trace = MotionTrace {
            distance: 10.0,
            speed: 2.0,
            t0: 0.5,
            duration: 6.0,
            accel_end: 1.0,
            decel_start: 5.0,
            phase: lift_motion::Phase::Cruising,
            travelled: 4.0,
        };
        assert_eq!(
            trace.to_string(),
            "s= 10, v=2.0, t0=0.5, t1=6.0, tacc=1.0, tdec=5.0, cruising"
        );
    }
}
