//! Frame observer trait for progress reporting and trace collection.

use lift_motion::MotionTrace;

/// Callbacks invoked by [`CarSim`][crate::CarSim] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — stdout trace printer
///
/// ```rust,ignore
/// struct TracePrinter;
///
/// impl CarObserver for TracePrinter {
///     fn on_advance(&mut self, frame: u64, trace: &MotionTrace) {
///         println!("frame {frame}: {trace}");
///     }
/// }
/// ```
pub trait CarObserver {
    /// Called at the very start of each frame, before the car advances.
    fn on_frame_start(&mut self, _frame: u64) {}

    /// Called after `advance` on frames where the journey is in flight.
    /// Terminal frames (car already at its destination) skip this.
    fn on_advance(&mut self, _frame: u64, _trace: &MotionTrace) {}

    /// Called at the end of each frame, after presentation update.
    fn on_frame_end(&mut self, _frame: u64, _floor: f64) {}

    /// Called once when [`CarSim::run`][crate::CarSim::run] finishes.
    fn on_run_end(&mut self, _final_frame: u64) {}
}

/// A [`CarObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl CarObserver for NoopObserver {}
