//! CSV motion trace output.
//!
//! One row per in-flight tick: frame counter, floor after the tick, and the
//! planned profile the controller evaluated.  Terminal frames (car parked
//! at its destination) produce no row.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use lift_motion::MotionTrace;
use thiserror::Error;

use crate::CarObserver;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`CarObserver`] that writes the motion trace to CSV.
///
/// Errors from the underlying writer are stored internally because observer
/// methods have no return value.  After the run, check for them with
/// [`take_error`][Self::take_error].
pub struct CsvTraceWriter<W: Write> {
    writer: Writer<W>,
    /// Trace captured by `on_advance`, flushed with the floor in
    /// `on_frame_end`.
    pending: Option<MotionTrace>,
    last_error: Option<TraceError>,
    finished: bool,
}

impl CsvTraceWriter<File> {
    /// Create `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self, TraceError> {
        Self::from_writer(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvTraceWriter<W> {
    /// Wrap an already-open CSV writer and emit the header row.
    pub fn from_writer(mut writer: Writer<W>) -> Result<Self, TraceError> {
        writer.write_record([
            "frame", "floor", "distance", "speed", "t0", "duration", "accel_end", "decel_start",
            "phase", "travelled",
        ])?;
        Ok(Self {
            writer,
            pending: None,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Flush and unwrap the inner writer (e.g. to inspect the bytes in
    /// tests).
    pub fn into_writer(mut self) -> Result<W, TraceError> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| TraceError::Io(e.into_error()))
    }

    fn store_err(&mut self, result: Result<(), csv::Error>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> CarObserver for CsvTraceWriter<W> {
    fn on_advance(&mut self, _frame: u64, trace: &MotionTrace) {
        self.pending = Some(*trace);
    }

    fn on_frame_end(&mut self, frame: u64, floor: f64) {
        let Some(trace) = self.pending.take() else {
            return; // terminal frame, nothing to record
        };
        let result = self.writer.write_record(&[
            frame.to_string(),
            floor.to_string(),
            trace.distance.to_string(),
            trace.speed.to_string(),
            trace.t0.to_string(),
            trace.duration.to_string(),
            trace.accel_end.to_string(),
            trace.decel_start.to_string(),
            trace.phase.to_string(),
            trace.travelled.to_string(),
        ]);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_frame: u64) {
        if self.finished {
            return;
        }
        self.finished = true;
        if let Err(e) = self.writer.flush() {
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}
