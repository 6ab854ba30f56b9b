//! `lift-sim` — the car composite and its frame driver.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`conveyance`] | `Conveyance` — the full collaborator surface             |
//! | [`car`]        | `Car` — motion + presentation + one-shot audio           |
//! | [`sim`]        | `CarSim` — fixed-dt frame loop with ordering guarantees  |
//! | [`observer`]   | `CarObserver`, `NoopObserver`                            |
//! | [`trace`]      | `CsvTraceWriter` — per-tick motion trace to CSV          |
//! | [`error`]      | `SimError`, `SimResult<T>`                               |
//!
//! # Frame model
//!
//! Single-threaded, synchronous, tick-driven.  Each frame the driver calls
//! `advance(dt)` first and `update()` second, so presentation always
//! reflects the tick's new floor; `draw` never recomputes anything.  All
//! collaborators (capability provider, audio sink, texture source) are
//! owned by the [`CarSim`] and lent into the car per frame.

pub mod car;
pub mod conveyance;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trace;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::Car;
pub use conveyance::Conveyance;
pub use error::{SimError, SimResult};
pub use observer::{CarObserver, NoopObserver};
pub use sim::CarSim;
pub use trace::{CsvTraceWriter, TraceError};
