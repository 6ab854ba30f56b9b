//! `lift-core` — foundational types for the `rust_lift` elevator simulation
//! framework.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`geom`]      | `Vec2`, `Rect` — f64 screen/world geometry           |
//! | [`refresh`]   | `Refresh` — dirty flag for deferred recomputation    |
//! | [`error`]     | `LiftError`, `LiftResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geom;
pub mod refresh;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LiftError, LiftResult};
pub use geom::{Rect, Vec2};
pub use refresh::Refresh;
